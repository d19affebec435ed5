use glam::{Vec3, Vec4};

use crate::scene::light::Light;
use crate::scene::material::Material;
use crate::shading::state::{ShadingState, MAX_LIGHTS};
use crate::terrain::mesh::TerrainVertex;

/// How strongly the normalized height attribute tints the diffuse color.
const HEIGHT_TINT: f32 = 0.7;

/// Specular scale of the Phong-Blinn lobe.
const SPECULAR_SCALE: f32 = 0.25;

/// Phong-Blinn radiance at a surface point, accumulated over the active
/// lights.
///
/// The diffuse color is blended toward a fixed offset by the normalized
/// height attribute, a purely cosmetic elevation tint. The normal is flipped
/// toward the viewer when `dot(N, V) < 0` so one-sided and non-orientable
/// surfaces shade on both faces; this deliberately mis-shades a genuinely
/// double-sided thin surface lit from behind.
pub fn evaluate_reflectance(
    material: &Material,
    lights: &[Light],
    normal: Vec3,
    view: Vec3,
    world_pos: Vec4,
    height: f32,
) -> Vec3 {
    let tint = (material.kd - Vec3::X) * (HEIGHT_TINT * height) + material.kd;

    let mut n = normal.normalize_or_zero();
    let v = view.normalize_or_zero();
    if n.dot(v) < 0.0 {
        n = -n;
    }

    let mut radiance = Vec3::ZERO;
    for light in lights.iter().take(MAX_LIGHTS) {
        let l = light.direction_from(world_pos).normalize_or_zero();
        let h = (l + v).normalize_or_zero();
        let cos_theta = n.dot(l).abs();
        let cos_delta = n.dot(h).abs();
        radiance += (tint * cos_theta
            + material.ks * SPECULAR_SCALE * cos_delta.powf(material.shininess))
            * light.radiance;
    }
    radiance
}

impl ShadingState {
    /// Shade one mesh vertex: transform it to world space, derive the view
    /// vector, and evaluate the reflectance under this state's lights.
    pub fn shade_vertex(&self, vertex: &TerrainVertex) -> Vec3 {
        let world_pos = self.world_position(Vec3::from_array(vertex.position));
        let normal = self.world_normal(Vec3::from_array(vertex.normal));
        let view = self.view_dir(world_pos);
        evaluate_reflectance(
            &self.material,
            &self.lights,
            normal,
            view,
            world_pos,
            vertex.height,
        )
    }
}
