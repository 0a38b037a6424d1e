//! Boundary adapter between the simulation and the render/input loop
//!
//! A `Host` owns at most one simulation. Setters are no-ops and accessors
//! return zero/false while no simulation exists, so the page can poll before
//! `init` or after `destroy` without faulting. On wasm32 the type is
//! exported to JavaScript and confined to the JS thread.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::math::{Vector3, flatten};
use crate::sim::{GameState, SimEvent, tick};
use crate::tuning::Tuning;

/// Install the panic hook and console logger when the module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Yard Runner core loaded");
}

/// Handle to a single simulation instance
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Default)]
pub struct Host {
    state: Option<GameState>,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl Host {
    /// Create an adapter with no simulation
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Start a new simulation with a random seed
    pub fn init(&mut self) {
        self.init_with_seed(rand::random::<u64>());
    }

    /// Start a new simulation with a fixed seed
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = initWithSeed))]
    pub fn init_with_seed(&mut self, seed: u64) {
        self.replace(GameState::with_seed(seed));
    }

    /// Start a new simulation with custom balance (JSON, see `Tuning`)
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = initWithTuning))]
    pub fn init_with_tuning(&mut self, seed: u64, tuning_json: &str) -> Result<()> {
        let tuning = Tuning::from_json(tuning_json)?;
        self.replace(GameState::new(seed, tuning)?);
        Ok(())
    }

    /// Drop the simulation
    pub fn destroy(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!(
                "Simulation destroyed after {} ticks (score {})",
                state.time_ticks,
                state.score()
            );
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = isInitialized))]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    // === Input ===

    /// Report a raw key transition; unmapped or out-of-range codes are ignored
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = setKey))]
    pub fn set_key(&mut self, code: i32, pressed: bool) {
        if let Some(state) = self.state.as_mut() {
            state.set_key(code, pressed);
        }
    }

    /// Report pointer movement and wheel zoom
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = setCameraDelta))]
    pub fn set_camera_delta(&mut self, delta_h: f32, delta_v: f32, delta_zoom: f32) {
        if let Some(state) = self.state.as_mut() {
            state.update_camera(delta_h, delta_v, delta_zoom);
        }
    }

    /// Fire one bullet now (ignored while driving)
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = triggerShoot))]
    pub fn trigger_shoot(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.shoot();
        }
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) {
        if let Some(state) = self.state.as_mut() {
            tick(state);
        }
    }

    // === Read-back ===

    pub fn seed(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.seed)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = tickCount))]
    pub fn tick_count(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.time_ticks)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = playerX))]
    pub fn player_x(&self) -> f32 {
        self.player().x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = playerY))]
    pub fn player_y(&self) -> f32 {
        self.player().y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = playerZ))]
    pub fn player_z(&self) -> f32 {
        self.player().z
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = vehicleX))]
    pub fn vehicle_x(&self) -> f32 {
        self.vehicle().x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = vehicleY))]
    pub fn vehicle_y(&self) -> f32 {
        self.vehicle().y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = vehicleZ))]
    pub fn vehicle_z(&self) -> f32 {
        self.vehicle().z
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = inVehicle))]
    pub fn in_vehicle(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.in_vehicle())
    }

    pub fn score(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.score())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = cameraYaw))]
    pub fn camera_yaw(&self) -> f32 {
        self.state.as_ref().map_or(0.0, |s| s.camera.yaw)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = cameraPitch))]
    pub fn camera_pitch(&self) -> f32 {
        self.state.as_ref().map_or(0.0, |s| s.camera.pitch)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = cameraDistance))]
    pub fn camera_distance(&self) -> f32 {
        self.state.as_ref().map_or(0.0, |s| s.camera.distance)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = enemyCount))]
    pub fn enemy_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.enemies.len())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = enemyX))]
    pub fn enemy_x(&self, index: usize) -> Result<f32> {
        Ok(self.enemy(index)?.x)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = enemyY))]
    pub fn enemy_y(&self, index: usize) -> Result<f32> {
        Ok(self.enemy(index)?.y)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = enemyZ))]
    pub fn enemy_z(&self, index: usize) -> Result<f32> {
        Ok(self.enemy(index)?.z)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = bulletCount))]
    pub fn bullet_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.bullets.len())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = bulletX))]
    pub fn bullet_x(&self, index: usize) -> Result<f32> {
        Ok(self.bullet(index)?.x)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = bulletY))]
    pub fn bullet_y(&self, index: usize) -> Result<f32> {
        Ok(self.bullet(index)?.y)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = bulletZ))]
    pub fn bullet_z(&self, index: usize) -> Result<f32> {
        Ok(self.bullet(index)?.z)
    }

    /// All enemy positions as `[x, y, z, ...]` (Float32Array on the web)
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = enemyPositions))]
    pub fn enemy_positions(&self) -> Vec<f32> {
        self.state
            .as_ref()
            .map(|s| flatten(&s.enemy_positions()))
            .unwrap_or_default()
    }

    /// All bullet positions as `[x, y, z, ...]` (Float32Array on the web)
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = bulletPositions))]
    pub fn bullet_positions(&self) -> Vec<f32> {
        self.state
            .as_ref()
            .map(|s| flatten(&s.bullet_positions()))
            .unwrap_or_default()
    }

    /// Whole frame state as JSON, or `None` without a simulation
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = snapshotJson))]
    pub fn snapshot_json(&self) -> Result<Option<String>> {
        match self.state.as_ref() {
            Some(state) => Ok(Some(serde_json::to_string(&state.snapshot())?)),
            None => Ok(None),
        }
    }
}

// Rust-only API
impl Host {
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    /// Drain events recorded since the last drain
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        self.state
            .as_mut()
            .map(GameState::take_events)
            .unwrap_or_default()
    }

    fn replace(&mut self, state: GameState) {
        if self.state.is_some() {
            log::info!("Replacing running simulation");
        }
        self.destroy();
        self.state = Some(state);
    }

    fn player(&self) -> Vector3 {
        self.state.as_ref().map_or(Vector3::ZERO, |s| s.player)
    }

    fn vehicle(&self) -> Vector3 {
        self.state.as_ref().map_or(Vector3::ZERO, |s| s.vehicle)
    }

    fn enemy(&self, index: usize) -> Result<Vector3> {
        match self.state.as_ref() {
            Some(state) => state.enemy_position(index).inspect_err(|err| {
                log::warn!("{err}");
            }),
            None => Ok(Vector3::ZERO),
        }
    }

    fn bullet(&self, index: usize) -> Result<Vector3> {
        match self.state.as_ref() {
            Some(state) => state.bullet_position(index).inspect_err(|err| {
                log::warn!("{err}");
            }),
            None => Ok(Vector3::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EntityKind, SimError};

    #[test]
    fn test_absent_defaults() {
        let mut host = Host::new();
        assert!(!host.is_initialized());

        // Setters are harmless
        host.set_key('w' as i32, true);
        host.set_camera_delta(10.0, 10.0, 10.0);
        host.trigger_shoot();
        host.tick();

        assert_eq!(host.player_x(), 0.0);
        assert_eq!(host.vehicle_z(), 0.0);
        assert!(!host.in_vehicle());
        assert_eq!(host.score(), 0);
        assert_eq!(host.camera_distance(), 0.0);
        assert_eq!(host.enemy_count(), 0);
        assert_eq!(host.bullet_count(), 0);
        assert_eq!(host.enemy_x(5).ok(), Some(0.0));
        assert_eq!(host.bullet_z(0).ok(), Some(0.0));
        assert!(host.enemy_positions().is_empty());
        assert_eq!(host.snapshot_json().ok(), Some(None));
        assert!(host.take_events().is_empty());
    }

    #[test]
    fn test_lifecycle() {
        let mut host = Host::new();
        host.init_with_seed(11);
        assert!(host.is_initialized());
        assert_eq!(host.seed(), 11);
        assert_eq!(host.enemy_count(), 3);
        assert_eq!(host.player_y(), 1.0);
        assert_eq!(host.vehicle_x(), 10.0);
        assert_eq!(host.camera_pitch(), 0.4);

        host.tick();
        assert_eq!(host.tick_count(), 1);

        host.destroy();
        assert!(!host.is_initialized());
        assert_eq!(host.enemy_count(), 0);
        assert_eq!(host.tick_count(), 0);
    }

    #[test]
    fn test_random_init() {
        let mut host = Host::new();
        host.init();
        assert!(host.is_initialized());
        assert_eq!(host.enemy_count(), 3);
    }

    #[test]
    fn test_index_out_of_bounds() {
        let mut host = Host::new();
        host.init_with_seed(1);
        assert!(host.enemy_y(2).is_ok());
        assert!(matches!(
            host.enemy_y(3),
            Err(SimError::IndexOutOfBounds {
                kind: EntityKind::Enemy,
                ..
            })
        ));
        assert!(matches!(
            host.bullet_x(0),
            Err(SimError::IndexOutOfBounds {
                kind: EntityKind::Bullet,
                index: 0,
                len: 0
            })
        ));
    }

    #[test]
    fn test_flattened_positions() {
        let mut host = Host::new();
        host.init_with_seed(1);
        let flat = host.enemy_positions();
        assert_eq!(flat.len(), 9);
        for i in 0..3 {
            assert_eq!(flat[i * 3], host.enemy_x(i).unwrap());
            assert_eq!(flat[i * 3 + 1], host.enemy_y(i).unwrap());
            assert_eq!(flat[i * 3 + 2], host.enemy_z(i).unwrap());
        }
    }

    #[test]
    fn test_init_with_tuning() {
        let mut host = Host::new();
        host.init_with_tuning(3, r#"{ "initial_enemies": 5 }"#)
            .expect("valid tuning");
        assert_eq!(host.enemy_count(), 5);

        // A bad config leaves the running simulation alone
        assert!(host.init_with_tuning(4, "not json").is_err());
        assert_eq!(host.seed(), 3);
        assert_eq!(host.enemy_count(), 5);
    }

    #[test]
    fn test_hosts_are_independent() {
        let mut a = Host::new();
        let mut b = Host::new();
        a.init_with_seed(1);
        b.init_with_seed(1);
        a.set_key('w' as i32, true);
        a.tick();
        b.tick();
        assert!(a.player_z() < b.player_z());
    }
}
