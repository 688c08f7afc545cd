//! Shader compilation and uniform upload
//!
//! Compiles a GLSL vertex/fragment pair into a program object. A compile
//! or link failure is not fatal: the driver info log is written to the
//! error log and the program keeps id 0, which GL treats as "no program".
//! Rendering then simply produces no output while the loop keeps running.

use crate::foundation::math::Mat4;
use gl::types::{GLchar, GLenum, GLint, GLuint};
use std::ffi::CString;
use std::path::Path;
use std::ptr;
use thiserror::Error;

/// Shader loading errors
///
/// Only file-level problems are errors; compile and link diagnostics are
/// logged instead (see module docs).
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Shader source file missing or unreadable
    #[error("failed to read shader source {path}: {source}")]
    Io {
        /// Path that failed to read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Linked shader program wrapper
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Read, compile, and link a vertex/fragment shader pair from files
    pub fn from_files(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        Ok(Self::from_sources(&vertex_source, &fragment_source))
    }

    /// Compile and link a vertex/fragment shader pair from source strings
    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> Self {
        unsafe {
            let vertex = compile_stage(vertex_source, gl::VERTEX_SHADER, "vertex");
            let fragment = compile_stage(fragment_source, gl::FRAGMENT_SHADER, "fragment");

            if vertex == 0 || fragment == 0 {
                gl::DeleteShader(vertex);
                gl::DeleteShader(fragment);
                return Self { id: 0 };
            }

            let program = gl::CreateProgram();
            gl::AttachShader(program, vertex);
            gl::AttachShader(program, fragment);
            gl::LinkProgram(program);

            // Modules are owned by the program once linked
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);

            let mut link_status = gl::FALSE as GLint;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut link_status);
            if link_status != gl::TRUE as GLint {
                log::error!("Shader link failed:\n{}", program_info_log(program));
                gl::DeleteProgram(program);
                return Self { id: 0 };
            }

            Self { id: program }
        }
    }

    /// Make this program current
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Raw program object id (0 after a failed compile or link)
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Set an integer uniform (used for sampler unit bindings)
    pub fn set_uniform_1i(&self, name: &str, value: i32) {
        unsafe {
            gl::Uniform1i(self.uniform_location(name), value);
        }
    }

    /// Upload a matrix uniform in column-major order
    pub fn set_uniform_mat4(&self, name: &str, matrix: &Mat4) {
        let columns = matrix.to_cols_array();
        unsafe {
            gl::UniformMatrix4fv(self.uniform_location(name), 1, gl::FALSE, columns.as_ptr());
        }
    }

    fn uniform_location(&self, name: &str) -> GLint {
        let name = CString::new(name).unwrap();
        unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            // Deleting program 0 is a silent no-op
            gl::DeleteProgram(self.id);
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Compile a single shader stage, returning 0 on failure after logging
unsafe fn compile_stage(source: &str, stage: GLenum, stage_name: &str) -> GLuint {
    let shader = gl::CreateShader(stage);

    let source = CString::new(source.as_bytes()).unwrap_or_default();
    gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut compile_status = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status);
    if compile_status != gl::TRUE as GLint {
        log::error!(
            "{} shader compilation failed:\n{}",
            stage_name,
            shader_info_log(shader)
        );
        gl::DeleteShader(shader);
        return 0;
    }

    shader
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    // Drop the trailing NUL the driver writes
    buf.pop();
    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    buf.pop();
    String::from_utf8_lossy(&buf).into_owned()
}
