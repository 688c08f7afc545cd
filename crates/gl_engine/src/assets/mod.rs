//! Asset loading
//!
//! Image decoding for texture uploads. Shader sources are plain text and
//! are read by the shader module directly.

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file missing or unreadable
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset present but could not be decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
