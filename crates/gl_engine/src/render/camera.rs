//! Camera producing the view and projection matrices
//!
//! Pure math on top of [`crate::foundation::math`]; no GL calls. Degrees
//! appear only in the configuration surface and are converted here.

use crate::core::config::CameraConfig;
use crate::foundation::math::{Mat4, Vec3};

/// 3D camera with position, orientation, and projection parameters
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// World-space up direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Camera {
    /// Build a camera from configuration values
    pub fn from_config(config: &CameraConfig) -> Self {
        let v = |a: [f32; 3]| Vec3::new(a[0], a[1], a[2]);
        Self {
            position: v(config.position),
            target: v(config.target),
            up: v(config.up),
            fov_y_degrees: config.fov_y_degrees,
            near: config.near,
            far: config.far,
        }
    }

    /// View matrix for the current placement
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Projection matrix for the given viewport aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_config_copies_every_parameter() {
        let camera = Camera::from_config(&CameraConfig::default());

        assert_eq!(camera.position, Vec3::new(-5.0, 0.0, 3.0));
        assert_eq!(camera.target, Vec3::zero());
        assert_eq!(camera.up, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(camera.fov_y_degrees, 45.0);
    }

    #[test]
    fn test_projection_converts_degrees_once() {
        let camera = Camera::from_config(&CameraConfig::default());
        let expected = Mat4::perspective(45.0_f32.to_radians(), 4.0 / 3.0, 0.1, 10.0);
        let actual = camera.projection_matrix(4.0 / 3.0);

        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(actual.m[i][j], expected.m[i][j], epsilon = 1e-6);
            }
        }
    }
}
