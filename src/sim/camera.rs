//! Orbit camera controller

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_START_DISTANCE, CAMERA_START_PITCH, CAMERA_START_YAW};
use crate::tuning::Tuning;

/// Third-person camera orbiting the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Horizontal angle (radians, unbounded)
    pub yaw: f32,
    /// Vertical angle (radians, clamped)
    pub pitch: f32,
    /// Orbit distance (clamped)
    pub distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: CAMERA_START_YAW,
            pitch: CAMERA_START_PITCH,
            distance: CAMERA_START_DISTANCE,
        }
    }
}

impl Camera {
    /// Apply pointer and zoom deltas; non-finite deltas are ignored
    pub fn apply_delta(&mut self, delta_h: f32, delta_v: f32, delta_zoom: f32, tuning: &Tuning) {
        if !(delta_h.is_finite() && delta_v.is_finite() && delta_zoom.is_finite()) {
            log::debug!("Ignoring non-finite camera delta");
            return;
        }
        self.yaw -= delta_h * tuning.camera_rotate_sensitivity;
        self.pitch = (self.pitch - delta_v * tuning.camera_rotate_sensitivity)
            .clamp(tuning.camera_pitch_min, tuning.camera_pitch_max);
        self.distance = (self.distance + delta_zoom * tuning.camera_zoom_sensitivity)
            .clamp(tuning.camera_distance_min, tuning.camera_distance_max);
    }
}
