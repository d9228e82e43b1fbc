//! Full configuration validation.
//!
//! Validates numeric ranges per section and collects every error into a
//! single `ConfigError`.

mod helpers;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::OrreryConfig;
use orrery_common::ConfigError;

use helpers::{validate_finite, validate_positive, validate_range, validate_range_f64};

/// Largest accepted segment count per sphere axis.
pub const MAX_SPHERE_SEGMENTS: u32 = 4096;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OrreryConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_camera(&mut errors, config);
    scene::validate_light(&mut errors, config);
    scene::validate_body(&mut errors, config);
    scene::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &OrreryConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

fn validate_camera(errors: &mut Vec<String>, config: &OrreryConfig) {
    let camera = &config.camera;
    validate_finite(errors, "camera.position", camera.position);
    validate_range_f64(errors, "camera.pitch", camera.pitch, -89.0, 89.0);
    validate_range_f64(errors, "camera.fov", camera.fov, 1.0, 179.0);
    validate_positive(errors, "camera.near", camera.near);
    validate_positive(errors, "camera.far", camera.far);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_range_f64(errors, "camera.move_speed", camera.move_speed, 0.0, 1000.0);
    validate_range_f64(
        errors,
        "camera.mouse_sensitivity",
        camera.mouse_sensitivity,
        0.0,
        10.0,
    );
}
