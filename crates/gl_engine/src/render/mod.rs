//! Rendering module
//!
//! OpenGL object wrappers (window/context, shader program, mesh, texture)
//! plus the camera and a handful of frame-level state helpers. Everything
//! GPU-side is RAII: created in `new`, deleted on `Drop`.

pub mod camera;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod window;

pub use camera::Camera;
pub use mesh::QuadMesh;
pub use shader::{ShaderError, ShaderProgram};
pub use texture::Texture;
pub use window::{Window, WindowError};

/// Set the color the framebuffer is cleared to
pub fn set_clear_color(r: f32, g: f32, b: f32, a: f32) {
    unsafe {
        gl::ClearColor(r, g, b, a);
    }
}

/// Clear the color buffer
pub fn clear() {
    unsafe {
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

/// Enable standard alpha blending (SRC_ALPHA, ONE_MINUS_SRC_ALPHA)
pub fn enable_alpha_blending() {
    unsafe {
        gl::Enable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
    }
}
