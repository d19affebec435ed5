use glam::{Mat4, Vec3};
use std::sync::Arc;

use crate::scene::material::Material;
use crate::terrain::mesh::StripMesh;
use crate::terrain::texture::CheckerTexture;

/// Rotation speed of the animated terrain patch (radians per time unit).
const SPIN_RATE: f32 = 0.8;

/// A renderable object: its own geometry and transform, plus shared
/// references to material and texture whose lifetime the scene manages.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: StripMesh,
    pub material: Arc<Material>,
    pub texture: Arc<CheckerTexture>,
    pub scale: Vec3,
    /// Must be unit length.
    pub rotation_axis: Vec3,
    pub rotation_angle: f32,
    pub translation: Vec3,
}

impl SceneObject {
    pub fn new(mesh: StripMesh, material: Arc<Material>, texture: Arc<CheckerTexture>) -> Self {
        Self {
            mesh,
            material,
            texture,
            scale: Vec3::ONE,
            rotation_axis: Vec3::Z,
            rotation_angle: 0.0,
            translation: Vec3::ZERO,
        }
    }

    /// Model matrix and its algebraic inverse.
    ///
    /// The model transform applies scale, then rotation, then translation;
    /// the inverse composes the inverse steps in the opposite order rather
    /// than inverting numerically.
    pub fn model_matrices(&self) -> (Mat4, Mat4) {
        let model = Mat4::from_translation(self.translation)
            * Mat4::from_axis_angle(self.rotation_axis, self.rotation_angle)
            * Mat4::from_scale(self.scale);
        let inverse = Mat4::from_scale(self.scale.recip())
            * Mat4::from_axis_angle(self.rotation_axis, -self.rotation_angle)
            * Mat4::from_translation(-self.translation);
        (model, inverse)
    }

    /// Advance the object's animation over `[t_start, t_end]`. The terrain
    /// patch spins around its rotation axis at a fixed rate.
    pub fn animate(&mut self, _t_start: f32, t_end: f32) {
        self.rotation_angle = SPIN_RATE * t_end;
    }
}
