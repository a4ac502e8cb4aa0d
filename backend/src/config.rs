//! Demo configuration, read from an optional TOML file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullscreenMode {
    /// Borderless window covering the desktop at its current resolution.
    Desktop,
    /// Real fullscreen, possibly switching the display mode.
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub window_count: usize,
    pub clear_color: [u8; 4],
    pub fullscreen: FullscreenMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            title: "SDL Tutorial".to_string(),
            width: 640,
            height: 480,
            window_count: 3,
            clear_color: [255, 255, 255, 255],
            fullscreen: FullscreenMode::Exclusive,
        }
    }
}

impl DemoConfig {
    /// Loads the configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<DemoConfig, ConfigError> {
        match path {
            Some(p) => Self::from_toml(&fs::read_to_string(p)?),
            None => Ok(DemoConfig::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<DemoConfig, ConfigError> {
        let config: DemoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must not be empty",
                self.width, self.height
            )));
        }
        // windows are focused with the digit keys 1..=9
        if !(1..=9).contains(&self.window_count) {
            return Err(ConfigError::Invalid(format!(
                "window_count {} must be between 1 and 9",
                self.window_count
            )));
        }
        if self.title.contains('\0') {
            return Err(ConfigError::Invalid("title contains a NUL byte".to_string()));
        }
        Ok(())
    }
}
