//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Initial camera pose, projection, and input sensitivity.
///
/// Angles are in degrees. Yaw −90° looks down −Z.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub yaw: f64,
    /// Valid range: -89.0 to 89.0.
    pub pitch: f64,
    /// Vertical field of view; also the upper bound for scroll zoom
    /// (valid range: 1.0-179.0).
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    /// World units per second.
    pub move_speed: f64,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.5, 15.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 90.0,
            near: 0.1,
            far: 100.0,
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}
