//! Configuration schema types for Orrery.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod camera;
mod logging;
mod scene;
mod window;

pub use camera::*;
pub use logging::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OrreryConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub body: BodyConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: OrreryConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Orrery");
        assert_eq!(config.light.segments.x, 25);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_overrides_nested_fields() {
        let toml_str = r#"
[light]
orbit_radius = 4.0

[light.segments]
y = 12

[logging]
level = "debug"
"#;
        let config: OrreryConfig = toml::from_str(toml_str).unwrap();
        assert!((config.light.orbit_radius - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.light.segments.x, 25);
        assert_eq!(config.light.segments.y, 12);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.body.segments.x, 48);
    }
}
