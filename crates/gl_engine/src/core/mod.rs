//! Core module - shared abstractions
//!
//! Currently this holds the configuration system; the foundation and
//! render modules build on top of it.

pub mod config;

pub use config::{
    ApplicationConfig, CameraConfig, Config, ConfigError, ShaderConfig, TextureConfig,
    WindowConfig,
};
