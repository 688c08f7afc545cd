//! Image loading utilities for texture data
//!
//! Decodes PNG/JPEG files into the RGBA8 layout the texture module uploads.

use crate::assets::AssetError;
use std::path::Path;

/// Decoded image data ready for GPU upload
///
/// Pixels are always RGBA8, row-major, top row first.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel bytes, `width * height * 4` long
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load and decode an image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        log::debug!("Loading image from {:?}", path);

        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => {
                AssetError::NotFound(format!("{}: {}", path.display(), io))
            }
            other => AssetError::LoadFailed(format!("{}: {}", path.display(), other)),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("Loaded {}x{} image from {:?}", width, height, path);

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Decode an image already held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// A single-color image, used as the fallback for missing texture files
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((width * height) as usize * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
        }
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_has_the_right_shape() {
        let img = ImageData::solid_color(4, 2, [255, 0, 0, 255]);

        assert_eq!(img.width, 4);
        assert_eq!(img.height, 2);
        assert_eq!(img.size_bytes(), 4 * 2 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
        assert_eq!(&img.data[img.size_bytes() - 4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_png_bytes_decode_to_rgba() {
        let mut png_bytes = Vec::new();
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .write_to(
                &mut std::io::Cursor::new(&mut png_bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let decoded = ImageData::from_bytes(&png_bytes).unwrap();

        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 3);
        assert_eq!(&decoded.data[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = ImageData::from_bytes(&[0x00, 0x01, 0x02, 0x03]);

        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let result = ImageData::from_file("no/such/image.png");

        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
