//! Configuration system
//!
//! TOML-backed configuration for the demo. Every struct has a `Default`
//! carrying the demo's fixed values, so a missing config file changes
//! nothing about what renders.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// TOML serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// TOML load/save for configuration types
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    ///
    /// A present-but-malformed file is an error; silently ignoring it would
    /// hide typos in overrides.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {:?}", path);
            Self::load_from_file(path)
        } else {
            log::info!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

/// Window creation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello, Window!".to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Shader source file paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Path to the vertex shader GLSL source
    pub vertex_path: String,
    /// Path to the fragment shader GLSL source
    pub fragment_path: String,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex_path: "quad_app/shaders/quad.vert".to_string(),
            fragment_path: "quad_app/shaders/quad.frag".to_string(),
        }
    }
}

/// Texture image file paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureConfig {
    /// Image sampled through the `material` uniform (texture unit 0)
    pub material_path: String,
    /// Image sampled through the `mask` uniform (texture unit 1)
    pub mask_path: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            material_path: "quad_app/assets/material.png".to_string(),
            mask_path: "quad_app/assets/mask.png".to_string(),
        }
    }
}

/// Camera placement and projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position in world space
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// World-space up direction
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [-5.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Window parameters
    pub window: WindowConfig,
    /// Shader source paths
    pub shaders: ShaderConfig,
    /// Texture image paths
    pub textures: TextureConfig,
    /// Camera parameters
    pub camera: CameraConfig,
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_fixed_demo_values() {
        let config = ApplicationConfig::default();

        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "Hello, Window!");
        assert_eq!(config.camera.position, [-5.0, 0.0, 3.0]);
        assert_eq!(config.camera.up, [0.0, 0.0, 1.0]);
        assert_eq!(config.camera.fov_y_degrees, 45.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 10.0);
    }

    #[test]
    fn test_toml_round_trip_preserves_every_field() {
        let mut config = ApplicationConfig::default();
        config.window.title = "Round trip".to_string();
        config.camera.fov_y_degrees = 60.0;
        config.textures.mask_path = "elsewhere/mask.png".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ApplicationConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let parsed: ApplicationConfig = toml::from_str(
            r#"
            [window]
            title = "Override"
            width = 800
            height = 600
            "#,
        )
        .unwrap();

        assert_eq!(parsed.window.width, 800);
        assert_eq!(parsed.shaders, ShaderConfig::default());
        assert_eq!(parsed.camera, CameraConfig::default());
    }
}
