use glam::{Mat4, Vec3, Vec4};
use std::sync::Arc;

use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::material::Material;
use crate::scene::object::SceneObject;
use crate::terrain::texture::CheckerTexture;

/// Fixed capacity of the light array a bound shader exposes.
pub const MAX_LIGHTS: usize = 8;

/// Everything one draw call needs: transform matrices, material, lights,
/// texture, and the eye position. Composed per object per frame and
/// discarded; nothing here survives across frames.
///
/// An external shader-binding collaborator consumes this as an opaque bag of
/// uniforms.
#[derive(Debug, Clone)]
pub struct ShadingState {
    pub mvp: Mat4,
    pub model: Mat4,
    pub model_inv: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    pub material: Arc<Material>,
    /// Active lights, truncated to [`MAX_LIGHTS`].
    pub lights: Vec<Light>,
    pub texture: Arc<CheckerTexture>,
}

impl ShadingState {
    pub fn compose(camera: &Camera, lights: &[Light], object: &SceneObject) -> Self {
        let (model, model_inv) = object.model_matrices();
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();

        Self {
            mvp: projection * view * model,
            model,
            model_inv,
            view,
            projection,
            eye: camera.eye,
            material: Arc::clone(&object.material),
            lights: lights.iter().take(MAX_LIGHTS).copied().collect(),
            texture: Arc::clone(&object.texture),
        }
    }

    /// Model-space position to homogeneous world space.
    pub fn world_position(&self, position: Vec3) -> Vec4 {
        self.model * position.extend(1.0)
    }

    /// Model-space normal to world space through the inverse-transpose.
    pub fn world_normal(&self, normal: Vec3) -> Vec3 {
        (self.model_inv.transpose() * normal.extend(0.0)).truncate()
    }

    /// Un-normalized view vector from a homogeneous world-space point
    /// toward the eye.
    pub fn view_dir(&self, world_pos: Vec4) -> Vec3 {
        self.eye * world_pos.w - world_pos.truncate()
    }

    /// Model-space position to clip space.
    pub fn clip_position(&self, position: Vec3) -> Vec4 {
        self.mvp * position.extend(1.0)
    }
}
