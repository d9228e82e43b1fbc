//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Logical height in pixels (valid range: 1-16384).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orrery".into(),
            width: 800,
            height: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Orrery");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 1280").unwrap();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 600);
        assert_eq!(config.title, "Orrery");
    }
}
