//! Quad mesh upload and drawing
//!
//! Two triangles covering [-1, 1] x [-1, 1] in the XY plane, uploaded once
//! as a vertex array object with separate position and texcoord buffers
//! plus an element buffer. The vertex tables are `const` so the geometry
//! can be checked without a GL context.

use gl::types::{GLsizei, GLsizeiptr, GLuint};
use std::mem;
use std::ptr;

/// Corner positions, X Y Z per vertex
pub const QUAD_POSITIONS: [f32; 12] = [
    -1.0, -1.0, 0.0, // bottom left
    1.0, -1.0, 0.0, // bottom right
    -1.0, 1.0, 0.0, // top left
    1.0, 1.0, 0.0, // top right
];

/// Texture coordinates, U V per vertex, matching [`QUAD_POSITIONS`] order
pub const QUAD_TEXCOORDS: [f32; 8] = [
    0.0, 0.0, //
    1.0, 0.0, //
    0.0, 1.0, //
    1.0, 1.0, //
];

/// Triangle indices into the vertex tables
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

/// GPU-resident two-triangle quad
pub struct QuadMesh {
    vao: GLuint,
    vbos: [GLuint; 2],
    ebo: GLuint,
    index_count: GLsizei,
}

impl QuadMesh {
    /// Upload the quad geometry
    ///
    /// Requires a current GL context.
    pub fn new() -> Self {
        let mut vao = 0;
        let mut vbos = [0; 2];
        let mut ebo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(2, vbos.as_mut_ptr());

            // Attribute 0: position
            let positions: &[u8] = bytemuck::cast_slice(&QUAD_POSITIONS);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbos[0]);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                positions.len() as GLsizeiptr,
                positions.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                (3 * mem::size_of::<f32>()) as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            // Attribute 1: texture coordinates
            let texcoords: &[u8] = bytemuck::cast_slice(&QUAD_TEXCOORDS);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbos[1]);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                texcoords.len() as GLsizeiptr,
                texcoords.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(
                1,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * mem::size_of::<f32>()) as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(1);

            let indices: &[u8] = bytemuck::cast_slice(&QUAD_INDICES);
            gl::GenBuffers(1, &mut ebo);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                indices.len() as GLsizeiptr,
                indices.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }

        Self {
            vao,
            vbos,
            ebo,
            index_count: QUAD_INDICES.len() as GLsizei,
        }
    }

    /// Draw the quad as indexed triangles
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                self.index_count,
                gl::UNSIGNED_INT,
                ptr::null(),
            );
        }
    }
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QuadMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(2, self.vbos.as_ptr());
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_describe_four_vertices_and_two_triangles() {
        assert_eq!(QUAD_POSITIONS.len(), 4 * 3);
        assert_eq!(QUAD_TEXCOORDS.len(), 4 * 2);
        assert_eq!(QUAD_INDICES.len(), 2 * 3);
    }

    #[test]
    fn test_every_index_references_a_vertex() {
        for &index in &QUAD_INDICES {
            assert!(index < 4);
        }
    }

    #[test]
    fn test_both_triangles_are_wound_counter_clockwise() {
        let corner = |i: u32| {
            let i = i as usize;
            (QUAD_POSITIONS[i * 3], QUAD_POSITIONS[i * 3 + 1])
        };

        for triangle in QUAD_INDICES.chunks(3) {
            let (ax, ay) = corner(triangle[0]);
            let (bx, by) = corner(triangle[1]);
            let (cx, cy) = corner(triangle[2]);
            let signed_area = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
            assert!(signed_area > 0.0, "triangle {:?} is not CCW", triangle);
        }
    }

    #[test]
    fn test_texcoords_span_the_unit_square() {
        for pair in QUAD_TEXCOORDS.chunks(2) {
            assert!((0.0..=1.0).contains(&pair[0]));
            assert!((0.0..=1.0).contains(&pair[1]));
        }
        // Opposite corners of the quad map to opposite corners of the image
        assert_eq!(&QUAD_TEXCOORDS[0..2], &[0.0, 0.0]);
        assert_eq!(&QUAD_TEXCOORDS[6..8], &[1.0, 1.0]);
    }
}
