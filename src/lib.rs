//! Yard Runner - on-foot/vehicle arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, projectiles, game state)
//! - `host`: Boundary adapter for the render/input loop (WebAssembly on the web)
//! - `tuning`: Data-driven game balance
//! - `math`: Vector helpers on top of glam

pub mod error;
pub mod host;
pub mod math;
pub mod sim;
pub mod tuning;

pub use error::{EntityKind, Result, SimError};
pub use host::Host;
pub use math::Vector3;
pub use tuning::Tuning;

/// World layout constants (not tunable)
pub mod consts {
    use glam::Vec3;

    /// Size of the raw key-code table accepted from the host
    pub const KEY_TABLE_SIZE: i32 = 256;

    /// Player spawn point
    pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Vehicle parking spot
    pub const VEHICLE_START: Vec3 = Vec3::new(10.0, 0.75, 0.0);

    /// Initial camera yaw (radians)
    pub const CAMERA_START_YAW: f32 = 0.0;
    /// Initial camera pitch (radians)
    pub const CAMERA_START_PITCH: f32 = 0.4;
    /// Initial camera orbit distance
    pub const CAMERA_START_DISTANCE: f32 = 10.0;

    /// Camera-local forward direction (-Z)
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    /// Seed used by the native driver when none is given
    pub const DEFAULT_SEED: u64 = 42;

    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 1024;
}
