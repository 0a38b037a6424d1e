//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod entity;
pub mod input;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use entity::{Bullet, Enemy};
pub use input::{Action, InputState};
pub use state::{EnemyView, GameState, SimEvent, Snapshot};
pub use tick::{drive_vehicle, handle_interaction, move_on_foot, resolve_projectiles, tick};
