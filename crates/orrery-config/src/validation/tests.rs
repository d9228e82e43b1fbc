//! Tests for the full validation pipeline.

use super::*;
use crate::schema::OrreryConfig;

#[test]
fn default_config_validates() {
    let config = OrreryConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_light_segments() {
    let mut config = OrreryConfig::default();
    config.light.segments.x = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("light.segments.x"));
}

#[test]
fn catches_body_segments_above_max() {
    let mut config = OrreryConfig::default();
    config.body.segments.y = MAX_SPHERE_SEGMENTS + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("body.segments.y"));
}

#[test]
fn max_segments_is_accepted() {
    let mut config = OrreryConfig::default();
    config.light.segments.x = MAX_SPHERE_SEGMENTS;
    config.light.segments.y = MAX_SPHERE_SEGMENTS;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_far_not_beyond_near() {
    let mut config = OrreryConfig::default();
    config.camera.near = 5.0;
    config.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = OrreryConfig::default();
    config.camera.fov = 180.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.fov"));
}

#[test]
fn catches_nan_orbit_radius() {
    let mut config = OrreryConfig::default();
    config.light.orbit_radius = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("light.orbit_radius"));
}

#[test]
fn catches_negative_orbit_speed() {
    let mut config = OrreryConfig::default();
    config.light.orbit_speed = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("light.orbit_speed"));
}

#[test]
fn catches_color_channel_out_of_range() {
    let mut config = OrreryConfig::default();
    config.body.color = [0.5, 1.5, 0.5];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("body.color.g"));
}

#[test]
fn catches_zero_window_size() {
    let mut config = OrreryConfig::default();
    config.window.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = OrreryConfig::default();
    config.light.segments.y = 0;
    config.camera.pitch = 120.0;
    config.render.clear_color = [-0.1, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("light.segments.y"));
    assert!(err.contains("camera.pitch"));
    assert!(err.contains("render.clear_color.r"));
}
