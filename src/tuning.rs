//! Game balance numbers
//!
//! Every speed, radius and clamp the simulation uses lives here so a host can
//! swap in a different balance as JSON without touching code.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Tunable simulation parameters (units are world units per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Population ===
    /// Enemies spawned when a simulation starts
    pub initial_enemies: u32,
    /// Enemies spawn with x and z drawn from [-extent, extent]
    pub spawn_half_extent: f32,
    /// Spawn height of enemies
    pub enemy_spawn_height: f32,
    /// Hits needed to kill a fresh enemy
    pub enemy_health: i32,

    // === Movement ===
    /// Player can enter the vehicle when strictly closer than this
    pub enter_vehicle_radius: f32,
    /// On-foot speed
    pub walk_speed: f32,
    /// Vehicle speed per held axis key
    pub drive_speed: f32,

    // === Projectiles ===
    pub bullet_speed: f32,
    /// Bullet hits an enemy when strictly closer than this
    pub hit_radius: f32,
    /// Ticks a bullet may fly without hitting anything (None = forever)
    pub bullet_max_ticks: Option<u32>,

    // === Camera ===
    /// Radians per unit of horizontal/vertical pointer delta
    pub camera_rotate_sensitivity: f32,
    /// Distance per unit of zoom delta
    pub camera_zoom_sensitivity: f32,
    pub camera_pitch_min: f32,
    pub camera_pitch_max: f32,
    pub camera_distance_min: f32,
    pub camera_distance_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_enemies: 3,
            spawn_half_extent: 20.0,
            enemy_spawn_height: 1.0,
            enemy_health: 3,

            enter_vehicle_radius: 4.0,
            walk_speed: 0.2,
            drive_speed: 0.3,

            bullet_speed: 0.5,
            hit_radius: 1.0,
            // 120 world units at the default bullet speed
            bullet_max_ticks: Some(240),

            camera_rotate_sensitivity: 0.005,
            camera_zoom_sensitivity: 0.01,
            camera_pitch_min: 0.1,
            camera_pitch_max: 1.4,
            camera_distance_min: 5.0,
            camera_distance_max: 20.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.initial_enemies == 0 {
            return Err(invalid("initial_enemies must be at least 1"));
        }
        if self.enemy_health < 1 {
            return Err(invalid("enemy_health must be at least 1"));
        }
        if !(self.spawn_half_extent.is_finite() && self.spawn_half_extent >= 0.0) {
            return Err(invalid("spawn_half_extent must be finite and non-negative"));
        }
        if !self.enemy_spawn_height.is_finite() {
            return Err(invalid("enemy_spawn_height must be finite"));
        }

        let positive = [
            ("enter_vehicle_radius", self.enter_vehicle_radius),
            ("walk_speed", self.walk_speed),
            ("drive_speed", self.drive_speed),
            ("bullet_speed", self.bullet_speed),
            ("hit_radius", self.hit_radius),
            ("camera_rotate_sensitivity", self.camera_rotate_sensitivity),
            ("camera_zoom_sensitivity", self.camera_zoom_sensitivity),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(&format!("{name} must be finite and positive")));
            }
        }

        if self.bullet_max_ticks == Some(0) {
            return Err(invalid("bullet_max_ticks must be at least 1 (or null)"));
        }
        if !(self.camera_pitch_min <= self.camera_pitch_max) {
            return Err(invalid("camera_pitch_min must not exceed camera_pitch_max"));
        }
        if !(self.camera_distance_min <= self.camera_distance_max) {
            return Err(invalid(
                "camera_distance_min must not exceed camera_distance_max",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SimError {
    SimError::InvalidTuning(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "walk_speed": 0.5, "bullet_max_ticks": null }"#)
            .expect("valid json");
        assert_eq!(tuning.walk_speed, 0.5);
        assert_eq!(tuning.bullet_max_ticks, None);
        assert_eq!(tuning.drive_speed, 0.3);
        assert_eq!(tuning.initial_enemies, 3);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().expect("serializes");
        assert_eq!(Tuning::from_json(&json).expect("parses"), tuning);
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ walk_speed: ").unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn test_rejects_inverted_clamp() {
        let err = Tuning::from_json(r#"{ "camera_distance_min": 30.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{ "initial_enemies": 0 }"#,
            r#"{ "enemy_health": 0 }"#,
            r#"{ "walk_speed": -1.0 }"#,
            r#"{ "bullet_max_ticks": 0 }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(SimError::InvalidTuning(_))),
                "{json} should be rejected"
            );
        }
    }
}
