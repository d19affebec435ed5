use glam::{Mat4, Vec3};

/// Perspective camera described by extrinsics (eye, look-at, up) and
/// intrinsics (vertical field of view, aspect, clip planes).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view (radians).
    pub fov_y: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, -1.0, 4.0),
            look_at: Vec3::new(0.0, -2.3, 0.0),
            up: Vec3::Y,
            fov_y: 75.0_f32.to_radians(),
            aspect: 1.0,
            near: 1.0,
            far: 20.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_at, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}
