use anyhow::Result;
use glam::Vec3;
use std::sync::Arc;

use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::material::Material;
use crate::scene::object::SceneObject;
use crate::shading::state::ShadingState;
use crate::terrain::height_field::{HeightField, HeightFieldConfig};
use crate::terrain::tessellator::{tessellate, TESSELLATION_LEVEL};
use crate::terrain::texture::CheckerTexture;

/// Animation sub-step size: `advance` never hands an object a larger time
/// slice than this, keeping per-step rotation increments bounded.
pub const ANIMATION_STEP: f32 = 0.1;

/// A camera, a light list, and the objects they illuminate. Built once; the
/// per-frame shading states derived from it are transient.
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// The spinning-terrain demo scene: one tessellated spectral height
    /// field under three directional lights.
    pub fn terrain_demo(seed: u64) -> Result<Self> {
        let field = HeightField::new(&HeightFieldConfig {
            seed,
            ..Default::default()
        })?;
        let mesh = tessellate(&field, TESSELLATION_LEVEL, TESSELLATION_LEVEL);

        let material = Arc::new(Material::terrain());
        let texture = Arc::new(CheckerTexture::new(20, 20));

        let mut terrain = SceneObject::new(mesh, material, texture);
        terrain.translation = Vec3::new(0.0, -3.0, 0.0);
        terrain.scale = Vec3::splat(0.3);
        terrain.rotation_axis = Vec3::Y;

        let lights = vec![
            Light::directional(
                Vec3::new(5.0, 5.0, 4.0),
                Vec3::new(0.1, 0.1, 1.0),
                Vec3::new(1.2, 1.0, 0.7),
            ),
            Light::directional(
                Vec3::new(5.0, 10.0, 20.0),
                Vec3::splat(0.2),
                Vec3::new(0.8, 0.8, 1.1),
            ),
            Light::directional(
                Vec3::new(-5.0, 5.0, 5.0),
                Vec3::splat(0.1),
                Vec3::new(0.8, 0.8, 0.9),
            ),
        ];

        Ok(Self {
            camera: Camera::default(),
            lights,
            objects: vec![terrain],
        })
    }

    /// Compose one shading state per object for the current frame. States
    /// are rebuilt every call and never retained.
    pub fn frame_states(&self) -> Vec<ShadingState> {
        self.objects
            .iter()
            .map(|object| ShadingState::compose(&self.camera, &self.lights, object))
            .collect()
    }

    /// Advance all object animations over `[t_start, t_end]`, subdivided
    /// into sub-steps of at most [`ANIMATION_STEP`].
    pub fn advance(&mut self, t_start: f32, t_end: f32) {
        let mut t = t_start;
        while t < t_end {
            let dt = ANIMATION_STEP.min(t_end - t);
            for object in &mut self.objects {
                object.animate(t, t + dt);
            }
            t += dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scene() -> Scene {
        // full 200x200 tessellation is too slow for unit tests; shrink it
        let field = HeightField::new(&HeightFieldConfig {
            order: 6,
            ..Default::default()
        })
        .unwrap();
        let mesh = tessellate(&field, 8, 8);
        let mut terrain = SceneObject::new(
            mesh,
            Arc::new(Material::terrain()),
            Arc::new(CheckerTexture::new(4, 4)),
        );
        terrain.rotation_axis = Vec3::Y;

        Scene {
            camera: Camera::default(),
            lights: vec![Light::directional(
                Vec3::new(5.0, 5.0, 4.0),
                Vec3::ZERO,
                Vec3::ONE,
            )],
            objects: vec![terrain],
        }
    }

    #[test]
    fn one_state_per_object_per_frame() {
        let scene = small_scene();
        assert_eq!(scene.frame_states().len(), scene.objects.len());
    }

    #[test]
    fn advance_subdivides_into_bounded_steps() {
        let mut scene = small_scene();
        scene.advance(0.0, 0.25);
        // last sub-step ends exactly at t_end
        let angle = scene.objects[0].rotation_angle;
        assert!((angle - 0.8 * 0.25).abs() < 1e-5, "angle {}", angle);
    }

    #[test]
    fn advance_with_empty_interval_is_a_no_op() {
        let mut scene = small_scene();
        scene.advance(1.0, 1.0);
        assert_eq!(scene.objects[0].rotation_angle, 0.0);
    }
}
