//! Game state and core simulation types
//!
//! The state owns every entity; nothing outside it holds references into the
//! enemy or bullet lists.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::entity::{Bullet, Enemy};
use super::input::{Action, InputState};
use crate::consts::{FORWARD, MAX_PENDING_EVENTS, PLAYER_START, VEHICLE_START};
use crate::error::{EntityKind, Result, SimError};
use crate::math::{Vector3, rotate_by_yaw};
use crate::tuning::Tuning;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    EnteredVehicle,
    ExitedVehicle,
    BulletFired { position: Vector3 },
    EnemyHit { remaining_health: i32 },
    EnemyKilled { position: Vector3 },
    EnemySpawned { position: Vector3 },
    BulletExpired,
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Vector3,
    pub vehicle: Vector3,
    pub camera: Camera,
    pub input: InputState,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Events recorded since the last drain (oldest first, bounded)
    pub events: Vec<SimEvent>,
    pub(super) in_vehicle: bool,
    pub(super) score: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given seed and balance
    ///
    /// Rejects balance that fails `Tuning::validate`.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    /// Create a new game with default balance
    pub fn with_seed(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            time_ticks: 0,
            player: PLAYER_START,
            vehicle: VEHICLE_START,
            camera: Camera::default(),
            input: InputState::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            in_vehicle: false,
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };

        for _ in 0..state.tuning.initial_enemies {
            state.spawn_enemy();
        }
        log::info!(
            "Simulation created (seed {}, {} enemies)",
            seed,
            state.enemies.len()
        );

        state
    }

    pub fn in_vehicle(&self) -> bool {
        self.in_vehicle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Spawn an enemy at a random spot in the yard
    pub fn spawn_enemy(&mut self) -> Vector3 {
        let extent = self.tuning.spawn_half_extent;
        let x = self.rng.random_range(-extent..=extent);
        let z = self.rng.random_range(-extent..=extent);
        let position = Vector3::new(x, self.tuning.enemy_spawn_height, z);

        self.enemies
            .push(Enemy::new(position, self.tuning.enemy_health));
        self.record(SimEvent::EnemySpawned { position });
        position
    }

    /// Record a key transition from the host
    pub fn set_action(&mut self, action: Action, down: bool) {
        self.input.set(action, down);
    }

    /// Record a raw key code; returns false if the code is not mapped
    pub fn set_key(&mut self, code: i32, down: bool) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.set_action(action, down);
                true
            }
            None => {
                log::debug!("Ignoring key code {}", code);
                false
            }
        }
    }

    /// Apply pointer/zoom deltas to the camera
    pub fn update_camera(&mut self, delta_h: f32, delta_v: f32, delta_zoom: f32) {
        self.camera
            .apply_delta(delta_h, delta_v, delta_zoom, &self.tuning);
    }

    /// Camera-relative forward direction on the ground plane
    pub fn aim_direction(&self) -> Vector3 {
        rotate_by_yaw(FORWARD, self.camera.yaw)
    }

    /// Fire a bullet from the player along the camera heading
    ///
    /// Does nothing while driving. Returns whether a bullet was fired.
    pub fn shoot(&mut self) -> bool {
        if self.in_vehicle {
            return false;
        }
        let position = self.player;
        self.bullets.push(Bullet::new(position, self.aim_direction()));
        self.record(SimEvent::BulletFired { position });
        true
    }

    /// Position of the enemy at `index`
    pub fn enemy_position(&self, index: usize) -> Result<Vector3> {
        self.enemies
            .get(index)
            .map(|e| e.position)
            .ok_or(SimError::IndexOutOfBounds {
                kind: EntityKind::Enemy,
                index,
                len: self.enemies.len(),
            })
    }

    /// Position of the bullet at `index`
    pub fn bullet_position(&self, index: usize) -> Result<Vector3> {
        self.bullets
            .get(index)
            .map(|b| b.position)
            .ok_or(SimError::IndexOutOfBounds {
                kind: EntityKind::Bullet,
                index,
                len: self.bullets.len(),
            })
    }

    pub fn enemy_positions(&self) -> Vec<Vector3> {
        self.enemies.iter().map(|e| e.position).collect()
    }

    pub fn bullet_positions(&self) -> Vec<Vector3> {
        self.bullets.iter().map(|b| b.position).collect()
    }

    /// Queue an event for the host, dropping the oldest past the cap
    pub(super) fn record(&mut self, event: SimEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Take the events recorded so far
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            player: self.player,
            vehicle: self.vehicle,
            in_vehicle: self.in_vehicle,
            score: self.score,
            camera: self.camera,
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    position: e.position,
                    health: e.health,
                })
                .collect(),
            bullets: self.bullet_positions(),
        }
    }
}

/// Enemy as seen by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vector3,
    pub health: i32,
}

/// Flattened, serializable view of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: Vector3,
    pub vehicle: Vector3,
    pub in_vehicle: bool,
    pub score: u32,
    pub camera: Camera,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<Vector3>,
}
