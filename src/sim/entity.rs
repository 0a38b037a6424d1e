//! Enemy and bullet records

use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// An enemy standing in the yard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vector3,
    pub health: i32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(position: Vector3, health: i32) -> Self {
        Self {
            position,
            health,
            alive: true,
        }
    }

    /// Take one hit; returns true if this hit killed the enemy
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        if self.health <= 0 {
            self.alive = false;
        }
        !self.alive
    }
}

/// A bullet in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vector3,
    /// Unit direction of travel
    pub direction: Vector3,
    pub alive: bool,
    /// Ticks since the bullet was fired
    #[serde(default)]
    pub age_ticks: u32,
}

impl Bullet {
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
            alive: true,
            age_ticks: 0,
        }
    }

    /// Advance along the direction of travel
    pub fn advance(&mut self, speed: f32) {
        self.position += self.direction * speed;
        self.age_ticks = self.age_ticks.saturating_add(1);
    }
}
