//! Math utilities and types
//!
//! Hand-rolled vectors and 4x4 homogeneous transforms for 3D rendering.
//! Matrices are stored row-indexed (`m[row][col]`) and converted to the
//! column-major layout OpenGL expects via [`Mat4::to_cols_array`].

use std::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self / len
        } else {
            *self
        }
    }

    /// Dot product
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// 4D homogeneous vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vec4 {
    /// Create a new vector
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Lift a 3D point to homogeneous coordinates (w = 1)
    pub fn from_point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }
}

/// 4x4 matrix for homogeneous transformations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    /// Matrix entries, indexed `m[row][col]`
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity matrix
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// The zero matrix
    pub fn zero() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    /// Translation by `v`
    pub fn translation(v: Vec3) -> Self {
        let mut result = Self::identity();
        result.m[0][3] = v.x;
        result.m[1][3] = v.y;
        result.m[2][3] = v.z;
        result
    }

    /// Rotation around the Z axis
    ///
    /// `angle` is in radians; positive angles rotate +X towards +Y.
    pub fn rotation_z(angle: f32) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let mut result = Self::identity();
        result.m[0][0] = cos_a;
        result.m[0][1] = -sin_a;
        result.m[1][0] = sin_a;
        result.m[1][1] = cos_a;
        result
    }

    /// Right-handed view matrix looking from `eye` towards `target`
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(up).normalize();
        let u = r.cross(f).normalize();

        let mut result = Self::identity();
        result.m[0][0] = r.x;
        result.m[0][1] = r.y;
        result.m[0][2] = r.z;
        result.m[0][3] = -r.dot(eye);

        result.m[1][0] = u.x;
        result.m[1][1] = u.y;
        result.m[1][2] = u.z;
        result.m[1][3] = -u.dot(eye);

        result.m[2][0] = -f.x;
        result.m[2][1] = -f.y;
        result.m[2][2] = -f.z;
        result.m[2][3] = f.dot(eye);
        result
    }

    /// Perspective projection for a symmetric frustum
    ///
    /// `fov_y` is the vertical field of view in radians. Maps view-space
    /// depth `[-near, -far]` to clip space with the usual OpenGL `[-1, 1]`
    /// depth range.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov_y / 2.0).tan();

        let mut result = Self::zero();
        result.m[0][0] = 1.0 / (aspect * tan_half_fov);
        result.m[1][1] = 1.0 / tan_half_fov;
        result.m[2][2] = -(far + near) / (far - near);
        result.m[2][3] = -(2.0 * far * near) / (far - near);
        result.m[3][2] = -1.0;
        result
    }

    /// Apply the matrix to a homogeneous vector
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z + self.m[0][3] * v.w,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z + self.m[1][3] * v.w,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z + self.m[2][3] * v.w,
            self.m[3][0] * v.x + self.m[3][1] * v.y + self.m[3][2] * v.z + self.m[3][3] * v.w,
        )
    }

    /// Column-major array layout for `glUniformMatrix4fv`
    pub fn to_cols_array(&self) -> [f32; 16] {
        [
            self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0],
            self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1],
            self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2],
            self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3],
        ]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-6;

    fn assert_vec3_approx_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = EPSILON);
        assert_relative_eq!(a.y, b.y, epsilon = EPSILON);
        assert_relative_eq!(a.z, b.z, epsilon = EPSILON);
    }

    fn assert_mat4_approx_eq(a: Mat4, b: Mat4) {
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(a.m[i][j], b.m[i][j], epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_translation_moves_the_origin() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        let transformed = Mat4::translation(v).transform(Vec4::from_point(Vec3::zero()));

        assert_relative_eq!(transformed.x, v.x, epsilon = EPSILON);
        assert_relative_eq!(transformed.y, v.y, epsilon = EPSILON);
        assert_relative_eq!(transformed.z, v.z, epsilon = EPSILON);
        assert_relative_eq!(transformed.w, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        assert_mat4_approx_eq(Mat4::rotation_z(0.0), Mat4::identity());
    }

    #[test]
    fn test_quarter_turn_maps_x_to_y() {
        let rotated = Mat4::rotation_z(PI / 2.0).transform(Vec4::new(1.0, 0.0, 0.0, 1.0));

        assert_relative_eq!(rotated.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalize_yields_a_parallel_unit_vector() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let n = v.normalize();

        assert_relative_eq!(n.length(), 1.0, epsilon = EPSILON);
        // Parallel: the cross product with the original vanishes
        assert_vec3_approx_eq(n.cross(v), Vec3::zero());
        // Same direction, not opposite
        assert!(n.dot(v) > 0.0);
    }

    #[test]
    fn test_normalize_of_zero_is_zero() {
        assert_vec3_approx_eq(Vec3::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn test_cross_product_is_orthogonal_and_anticommutes() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(-2.0, 0.5, 4.0);
        let w = u.cross(v);

        assert_relative_eq!(w.dot(u), 0.0, epsilon = EPSILON);
        assert_relative_eq!(w.dot(v), 0.0, epsilon = EPSILON);
        assert_vec3_approx_eq(v.cross(u), -w);
    }

    #[test]
    fn test_standard_basis_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_vec3_approx_eq(x.cross(y), z);
        assert_vec3_approx_eq(y.cross(z), x);
        assert_vec3_approx_eq(z.cross(x), y);
    }

    #[test]
    fn test_look_at_down_negative_z_is_identity() {
        let view = Mat4::look_at(
            Vec3::zero(),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        assert_mat4_approx_eq(view, Mat4::identity());
    }

    #[test]
    fn test_look_at_rotation_rows_are_orthonormal() {
        let view = Mat4::look_at(
            Vec3::new(-5.0, 0.0, 3.0),
            Vec3::zero(),
            Vec3::new(0.0, 0.0, 1.0),
        );

        let rows = [
            Vec3::new(view.m[0][0], view.m[0][1], view.m[0][2]),
            Vec3::new(view.m[1][0], view.m[1][1], view.m[1][2]),
            Vec3::new(view.m[2][0], view.m[2][1], view.m[2][2]),
        ];

        for row in &rows {
            assert_relative_eq!(row.length(), 1.0, epsilon = EPSILON);
        }
        assert_relative_eq!(rows[0].dot(rows[1]), 0.0, epsilon = EPSILON);
        assert_relative_eq!(rows[0].dot(rows[2]), 0.0, epsilon = EPSILON);
        assert_relative_eq!(rows[1].dot(rows[2]), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_sends_the_eye_to_the_view_origin() {
        let eye = Vec3::new(-5.0, 0.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let eye_in_view = view.transform(Vec4::from_point(eye));

        assert_relative_eq!(eye_in_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_in_view.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_in_view.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_frustum_structure() {
        let proj = Mat4::perspective(PI / 4.0, 640.0 / 480.0, 0.1, 10.0);

        // Only the five documented entries may be nonzero
        let nonzero = [(0, 0), (1, 1), (2, 2), (2, 3), (3, 2)];
        for i in 0..4 {
            for j in 0..4 {
                if nonzero.contains(&(i, j)) {
                    assert!(proj.m[i][j] != 0.0, "expected m[{}][{}] to be nonzero", i, j);
                } else {
                    assert_relative_eq!(proj.m[i][j], 0.0, epsilon = EPSILON);
                }
            }
        }
        assert_relative_eq!(proj.m[3][2], -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_maps_the_near_plane_to_negative_one() {
        let near = 0.1;
        let far = 10.0;
        let proj = Mat4::perspective(PI / 4.0, 1.0, near, far);

        let on_near = proj.transform(Vec4::new(0.0, 0.0, -near, 1.0));
        assert_relative_eq!(on_near.z / on_near.w, -1.0, epsilon = 1e-5);

        let on_far = proj.transform(Vec4::new(0.0, 0.0, -far, 1.0));
        assert_relative_eq!(on_far.z / on_far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_multiplying_by_identity_is_a_no_op() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::rotation_z(0.7);

        assert_mat4_approx_eq(m * Mat4::identity(), m);
        assert_mat4_approx_eq(Mat4::identity() * m, m);
    }

    #[test]
    fn test_translation_composes_after_rotation() {
        // T * R rotates first, then translates, matching the demo's model matrix
        let model = Mat4::translation(Vec3::new(-0.2, 0.4, 0.0)) * Mat4::rotation_z(PI / 2.0);
        let p = model.transform(Vec4::new(1.0, 0.0, 0.0, 1.0));

        assert_relative_eq!(p.x, -0.2, epsilon = EPSILON);
        assert_relative_eq!(p.y, 1.4, epsilon = EPSILON);
    }

    #[test]
    fn test_column_major_layout_matches_gl_convention() {
        let t = Mat4::translation(Vec3::new(7.0, 8.0, 9.0));
        let cols = t.to_cols_array();

        // Translation lives in the last column: elements 12..15
        assert_relative_eq!(cols[12], 7.0, epsilon = EPSILON);
        assert_relative_eq!(cols[13], 8.0, epsilon = EPSILON);
        assert_relative_eq!(cols[14], 9.0, epsilon = EPSILON);
        assert_relative_eq!(cols[15], 1.0, epsilon = EPSILON);
    }
}
