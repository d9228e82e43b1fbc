//! Scene object configuration: the orbiting light indicator and the
//! central body.

use serde::{Deserialize, Serialize};

/// Angular resolution of a UV sphere.
///
/// `x` counts longitude steps, `y` latitude steps (valid range: 1-4096).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SegmentsConfig {
    pub x: u32,
    pub y: u32,
}

impl Default for SegmentsConfig {
    fn default() -> Self {
        Self { x: 25, y: 25 }
    }
}

/// The light source: a small sphere orbiting the origin in the XZ plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub segments: SegmentsConfig,
    pub orbit_radius: f64,
    /// Radians per second.
    pub orbit_speed: f64,
    /// Speed change per `H`/`J` press.
    pub speed_step: f64,
    /// Minimum seconds between two speed changes.
    pub debounce: f64,
    /// Linear RGB, each channel 0.0-1.0.
    pub color: [f64; 3],
    /// Draw as wireframe when the adapter supports line polygons.
    pub wireframe: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            segments: SegmentsConfig::default(),
            orbit_radius: 10.0,
            orbit_speed: 1.5,
            speed_step: 0.05,
            debounce: 0.15,
            color: [1.0, 1.0, 1.0],
            wireframe: true,
        }
    }
}

/// The lit body at the center of the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub segments: SegmentsConfig,
    pub scale: f64,
    pub offset: [f64; 3],
    pub color: [f64; 3],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            segments: SegmentsConfig { x: 48, y: 32 },
            scale: 1.5,
            offset: [0.0, -1.5, 0.0],
            color: [0.8, 0.8, 0.8],
        }
    }
}

/// Frame-level render settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub clear_color: [f64; 3],
    /// `Fifo` presentation when true, `AutoNoVsync` otherwise.
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.05, 0.05, 0.05],
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_defaults_match_demo_scene() {
        let light = LightConfig::default();
        assert_eq!(light.segments, SegmentsConfig { x: 25, y: 25 });
        assert!((light.orbit_radius - 10.0).abs() < f64::EPSILON);
        assert!((light.orbit_speed - 1.5).abs() < f64::EPSILON);
        assert!((light.speed_step - 0.05).abs() < f64::EPSILON);
        assert!((light.debounce - 0.15).abs() < f64::EPSILON);
        assert!(light.wireframe);
    }

    #[test]
    fn body_defaults() {
        let body = BodyConfig::default();
        assert_eq!(body.segments.x, 48);
        assert_eq!(body.segments.y, 32);
        assert_eq!(body.offset, [0.0, -1.5, 0.0]);
    }

    #[test]
    fn segments_partial_toml_keeps_other_axis() {
        let light: LightConfig = toml::from_str("[segments]\nx = 8\n").unwrap();
        assert_eq!(light.segments.x, 8);
        assert_eq!(light.segments.y, 25);
    }

    #[test]
    fn render_defaults() {
        let render = RenderConfig::default();
        assert_eq!(render.clear_color, [0.05, 0.05, 0.05]);
        assert!(render.vsync);
    }
}
