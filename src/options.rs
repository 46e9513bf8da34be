//! Centralized runtime options with TOML support.
//!
//! All tweakable settings (window size, camera motion parameters) are
//! consolidated here. Options deserialize from TOML so a viewer can be
//! launched against a config file without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PhotonError;

/// Viewport dimensions for the viewer window.
///
/// The window is created at this size and is not resizable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowOptions {
    /// Window width in physical pixels.
    pub width: u32,
    /// Window height in physical pixels.
    pub height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Camera motion parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Rotation sensitivity in degrees per pixel of pointer motion.
    pub look_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            look_sensitivity: 0.1,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Viewport dimensions.
    pub window: WindowOptions,
    /// Camera motion parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PhotonError::Io`] if the file cannot be read, or
    /// [`PhotonError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, PhotonError> {
        let content = std::fs::read_to_string(path).map_err(PhotonError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PhotonError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let parsed: Options = toml::from_str(
            "[camera]\nmove_speed = 5.0\n",
        )
        .unwrap();
        assert_eq!(parsed.camera.move_speed, 5.0);
        assert_eq!(
            parsed.camera.look_sensitivity,
            CameraOptions::default().look_sensitivity
        );
        assert_eq!(parsed.window, WindowOptions::default());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
