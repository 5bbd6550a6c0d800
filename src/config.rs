use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{NamedColor, Rgb565, default_palette};

/// Key under which the config is kept in eframe storage
pub const CONFIG_STORAGE_KEY: &str = "round_tft_designer.config";

/// Errors that can occur while loading an editor config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Editor-wide settings: display geometry, palette and hit-test slack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct EditorConfig {
    /// Side of the square canvas in display pixels; the visible disk is inscribed in it
    pub canvas_size: u32,
    pub default_color: Rgb565,
    pub default_background: Rgb565,
    pub default_font_size: u8,
    pub palette: Vec<NamedColor>,
    pub font_sizes: Vec<u8>,
    /// Added to a shape's stroke width to form its hit tolerance
    pub hit_margin: f64,
    /// On-screen magnification of the preview
    pub preview_scale: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 240,
            default_color: Rgb565::RED,
            default_background: Rgb565::BLACK,
            default_font_size: 1,
            palette: default_palette(),
            font_sizes: vec![1, 2, 4, 6, 7, 8],
            hit_margin: 2.0,
            preview_scale: 2.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size == 0 {
            return Err(ConfigError::Invalid("canvas_size must be positive".into()));
        }
        if self.font_sizes.is_empty() {
            return Err(ConfigError::Invalid("font_sizes must not be empty".into()));
        }
        if !self.font_sizes.contains(&self.default_font_size) {
            return Err(ConfigError::Invalid(format!(
                "default_font_size {} is not one of {:?}",
                self.default_font_size, self.font_sizes
            )));
        }
        if !(self.preview_scale > 0.0) {
            return Err(ConfigError::Invalid("preview_scale must be positive".into()));
        }
        if !(self.hit_margin >= 0.0) {
            return Err(ConfigError::Invalid("hit_margin must not be negative".into()));
        }
        Ok(())
    }

    /// Canvas side as a float, for drawing
    pub fn canvas_extent(&self) -> f32 {
        self.canvas_size as f32
    }

    /// Palette name of a color, if it has one
    pub fn color_name(&self, color: Rgb565) -> Option<&str> {
        self.palette
            .iter()
            .find(|entry| entry.color == color)
            .map(|entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.color_name(Rgb565::CYAN), Some("Cyan"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "canvas_size": 128, "default_color": "0x07E0" }"#).unwrap();
        assert_eq!(config.canvas_size, 128);
        assert_eq!(config.default_color, Rgb565::GREEN);
        assert_eq!(config.font_sizes, vec![1, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"0xF800\""));
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "canvas_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "default_font_size": 3 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "default_color": "0xNOPE" }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
