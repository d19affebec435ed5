use glam::Vec3;

/// Phong-Blinn reflectance coefficients. Immutable once attached to an
/// object; shared between objects via `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse color.
    pub kd: Vec3,
    /// Specular color.
    pub ks: Vec3,
    /// Ambient color.
    pub ka: Vec3,
    pub shininess: f32,
}

impl Material {
    /// The terrain demo's brown matte material.
    pub fn terrain() -> Self {
        Self {
            kd: Vec3::new(0.5, 0.25, 0.1),
            ks: Vec3::splat(0.2),
            ka: Vec3::splat(0.2),
            shininess: 1.0,
        }
    }
}
