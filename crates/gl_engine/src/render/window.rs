//! Window management using GLFW
//!
//! Creates the window with an OpenGL 3.3 core profile context, loads the
//! GL function pointers, and owns the event receiver.

use crate::core::config::WindowConfig;
use glfw::Context;
use std::ffi::CStr;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or GL context creation failed
    #[error("Window creation failed")]
    CreationFailed,
}

/// GLFW window wrapper with proper resource management
///
/// Construction makes the context current and loads the `gl` function
/// pointers, so GL calls are valid for the lifetime of this value.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    #[allow(dead_code)] // close events are polled but never drained
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and its OpenGL context
    pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_close_polling(true);
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::Viewport::is_loaded() || !gl::DrawElements::is_loaded() {
            return Err(WindowError::CreationFailed);
        }

        let (fb_width, fb_height) = window.get_framebuffer_size();
        unsafe {
            gl::Viewport(0, 0, fb_width, fb_height);

            let version = gl::GetString(gl::VERSION);
            if !version.is_null() {
                let version = CStr::from_ptr(version as *const _);
                log::info!("OpenGL context: {}", version.to_string_lossy());
            }
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Whether the user has requested the window to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Process pending window events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Present the back buffer (blocks on vsync)
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width as u32, height as u32)
    }

    /// Framebuffer width / height
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.framebuffer_size();
        width as f32 / height as f32
    }
}
