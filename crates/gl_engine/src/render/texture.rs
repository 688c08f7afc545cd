//! Texture objects
//!
//! Uploads [`ImageData`] into a TEXTURE_2D with repeat wrapping, linear
//! filtering, and generated mipmaps.

use crate::assets::{AssetError, ImageData};
use gl::types::{GLint, GLsizei, GLuint};
use std::path::Path;

/// GPU-resident 2D texture
pub struct Texture {
    id: GLuint,
}

impl Texture {
    /// Upload decoded image data
    ///
    /// Requires a current GL context.
    pub fn from_image(image: &ImageData) -> Self {
        let mut id = 0;

        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                gl::LINEAR_MIPMAP_LINEAR as GLint,
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as GLint,
                image.width as GLsizei,
                image.height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.data.as_ptr() as *const _,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        Self { id }
    }

    /// Decode an image file and upload it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let image = ImageData::from_file(path)?;
        Ok(Self::from_image(&image))
    }

    /// Bind to the given texture unit
    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }

    /// Raw texture object id
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
