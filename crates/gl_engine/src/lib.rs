//! # GL Engine
//!
//! A small OpenGL rendering library built around hand-rolled matrix math.
//!
//! ## Features
//!
//! - **Hand-rolled math**: 4x4 homogeneous transforms without an external
//!   linear algebra dependency
//! - **RAII GPU objects**: window/context, shader program, mesh, and
//!   texture wrappers that clean up on drop
//! - **Configuration**: optional TOML overrides for paths and camera
//! - **Logging**: `log` facade with an `env_logger` bootstrap
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     logging::init();
//!     let config = ApplicationConfig::default();
//!     let mut window = Window::new(&config.window)?;
//!     let mesh = QuadMesh::new();
//!     while !window.should_close() {
//!         window.poll_events();
//!         gl_engine::render::clear();
//!         mesh.draw();
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod foundation;
pub mod assets;
pub mod render;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData},
        core::config::{
            ApplicationConfig, CameraConfig, Config, ConfigError, ShaderConfig, TextureConfig,
            WindowConfig,
        },
        foundation::{
            logging,
            math::{Mat4, Vec3, Vec4},
            time::Timer,
        },
        render::{Camera, QuadMesh, ShaderError, ShaderProgram, Texture, Window, WindowError},
    };
}
