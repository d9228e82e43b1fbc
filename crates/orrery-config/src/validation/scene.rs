//! Validation for scene objects: light, body, and frame rendering.

use crate::schema::{OrreryConfig, SegmentsConfig};

use super::helpers::{validate_color, validate_finite, validate_positive, validate_range, validate_range_f64};
use super::MAX_SPHERE_SEGMENTS;

fn validate_segments(errors: &mut Vec<String>, name: &str, segments: SegmentsConfig) {
    validate_range(errors, &format!("{name}.x"), segments.x, 1, MAX_SPHERE_SEGMENTS);
    validate_range(errors, &format!("{name}.y"), segments.y, 1, MAX_SPHERE_SEGMENTS);
}

/// Validate the orbiting light.
pub(crate) fn validate_light(errors: &mut Vec<String>, config: &OrreryConfig) {
    let light = &config.light;
    validate_segments(errors, "light.segments", light.segments);
    validate_positive(errors, "light.orbit_radius", light.orbit_radius);
    validate_range_f64(errors, "light.orbit_speed", light.orbit_speed, 0.0, 100.0);
    validate_range_f64(errors, "light.speed_step", light.speed_step, 0.0, 10.0);
    validate_range_f64(errors, "light.debounce", light.debounce, 0.0, 5.0);
    validate_color(errors, "light.color", light.color);
}

/// Validate the central body.
pub(crate) fn validate_body(errors: &mut Vec<String>, config: &OrreryConfig) {
    let body = &config.body;
    validate_segments(errors, "body.segments", body.segments);
    validate_positive(errors, "body.scale", body.scale);
    validate_finite(errors, "body.offset", body.offset);
    validate_color(errors, "body.color", body.color);
}

/// Validate frame-level render settings.
pub(crate) fn validate_render(errors: &mut Vec<String>, config: &OrreryConfig) {
    validate_color(errors, "render.clear_color", config.render.clear_color);
}
