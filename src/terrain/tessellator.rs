use glam::Vec3;
use rayon::prelude::*;
use std::time::Instant;

use crate::dual::{Dual2, ParametricSurface};
use crate::terrain::height_field::HeightField;
use crate::terrain::mesh::{StripMesh, TerrainVertex};

/// Default strip and column count for the terrain patch.
pub const TESSELLATION_LEVEL: usize = 200;

/// World-space side length of the tessellated patch, centered at the origin.
pub const PATCH_EXTENT: f32 = 15.0;

/// Anything the tessellator can sample: maps a `(u, v)` parameter in the
/// unit square to a vertex with an un-normalized height attribute.
///
/// Two strategies implement this contract: [`HeightField`] with its fast
/// closed-form derivatives, and [`AutoDiffSurface`] which derives normals
/// for any [`ParametricSurface`] through dual-number differentiation.
pub trait SurfaceSampler {
    fn sample_vertex(&self, u: f32, v: f32) -> TerrainVertex;
}

impl SurfaceSampler for HeightField {
    fn sample_vertex(&self, u: f32, v: f32) -> TerrainVertex {
        let sample = self.sample(u, v);
        let half = PATCH_EXTENT * 0.5;
        let position = Vec3::new(
            u * PATCH_EXTENT - half,
            sample.height as f32,
            v * PATCH_EXTENT - half,
        );
        TerrainVertex::new(position, sample.normal, sample.height as f32)
    }
}

/// Adapter giving any [`ParametricSurface`] exact normals via automatic
/// differentiation: the normal is ∂r/∂u × ∂r/∂v, and the surface's world
/// `y` coordinate doubles as the height attribute.
pub struct AutoDiffSurface<S>(pub S);

impl<S: ParametricSurface> SurfaceSampler for AutoDiffSurface<S> {
    fn sample_vertex(&self, u: f32, v: f32) -> TerrainVertex {
        let [x, y, z] = self.0.eval(Dual2::var_u(u), Dual2::var_v(v));

        let position = Vec3::new(x.val, y.val, z.val);
        let r_u = Vec3::new(x.der.x, y.der.x, z.der.x);
        let r_v = Vec3::new(x.der.y, y.der.y, z.der.y);
        let normal = r_u.cross(r_v).normalize_or_zero();

        TerrainVertex::new(position, normal, y.val)
    }
}

/// Tessellate a surface into `strips` triangle strips of `(cols + 1) * 2`
/// vertices each.
///
/// Each strip emits a double row: for every column, one vertex on the
/// strip's lower parametric row and one on the upper, which is the layout a
/// triangle-strip draw expects for independent horizontal bands. After all
/// vertices exist, a second pass remaps the height attribute to [0, 1]
/// against the global min/max.
///
/// Degenerate dimensions (`strips == 0` or `cols == 0`) yield an empty mesh.
pub fn tessellate<S>(surface: &S, strips: usize, cols: usize) -> StripMesh
where
    S: SurfaceSampler + Sync,
{
    if strips == 0 || cols == 0 {
        return StripMesh::empty();
    }

    let start = Instant::now();
    let verts_per_strip = (cols + 1) * 2;

    let mut vertices: Vec<TerrainVertex> = (0..strips)
        .into_par_iter()
        .flat_map_iter(|row| {
            let v_lo = row as f32 / strips as f32;
            let v_hi = (row + 1) as f32 / strips as f32;
            (0..=cols).flat_map(move |col| {
                let u = col as f32 / cols as f32;
                [surface.sample_vertex(u, v_lo), surface.sample_vertex(u, v_hi)]
            })
        })
        .collect();

    normalize_heights(&mut vertices);

    log::info!(
        "tessellated {} strips x {} cols: {} vertices in {:?}",
        strips,
        cols,
        vertices.len(),
        start.elapsed()
    );

    StripMesh::new(vertices, strips, verts_per_strip)
}

/// Remap every height attribute to [0, 1] against the global min/max.
///
/// This has to be a second pass: the remap is unknowable until every sample
/// exists. The range is floored at `1e-5` so a degenerate flat field decays
/// to all-zero heights instead of NaN.
fn normalize_heights(vertices: &mut [TerrainVertex]) {
    let min = vertices
        .iter()
        .map(|v| v.height)
        .fold(f32::INFINITY, f32::min);
    let max = vertices
        .iter()
        .map(|v| v.height)
        .fold(f32::NEG_INFINITY, f32::max);
    let range = (max - min).max(1e-5);

    for vertex in vertices {
        vertex.height = (vertex.height - min) / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::Dual;
    use crate::terrain::height_field::HeightFieldConfig;

    fn test_field() -> HeightField {
        HeightField::new(&HeightFieldConfig {
            order: 8,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn vertex_count_invariant() {
        let field = test_field();
        for &(n, m) in &[(1usize, 1usize), (2, 3), (5, 4), (10, 10)] {
            let mesh = tessellate(&field, n, m);
            assert_eq!(
                mesh.vertices().len(),
                n * (m + 1) * 2,
                "strips={} cols={}",
                n,
                m
            );
        }
    }

    #[test]
    fn two_by_three_grid_has_sixteen_vertices() {
        let mesh = tessellate(&test_field(), 2, 3);
        assert_eq!(mesh.vertices().len(), 16);
    }

    #[test]
    fn degenerate_dimensions_yield_empty_mesh() {
        let field = test_field();
        assert!(tessellate(&field, 0, 10).is_empty());
        assert!(tessellate(&field, 10, 0).is_empty());
    }

    #[test]
    fn heights_are_normalized_to_unit_range() {
        let mesh = tessellate(&test_field(), 20, 20);
        let min = mesh
            .vertices()
            .iter()
            .map(|v| v.height)
            .fold(f32::INFINITY, f32::min);
        let max = mesh
            .vertices()
            .iter()
            .map(|v| v.height)
            .fold(f32::NEG_INFINITY, f32::max);

        assert!(min.abs() < 1e-5, "min height {} should be 0", min);
        assert!((max - 1.0).abs() < 1e-5, "max height {} should be 1", max);
    }

    #[test]
    fn flat_surface_degrades_without_nan() {
        struct Flat;
        impl SurfaceSampler for Flat {
            fn sample_vertex(&self, u: f32, v: f32) -> TerrainVertex {
                TerrainVertex::new(glam::Vec3::new(u, 2.5, v), glam::Vec3::Y, 2.5)
            }
        }

        let mesh = tessellate(&Flat, 3, 3);
        assert!(
            mesh.vertices().iter().all(|v| v.height.is_finite()),
            "flat field must not produce non-finite heights"
        );
    }

    #[test]
    fn patch_spans_centered_world_square() {
        let mesh = tessellate(&test_field(), 4, 4);
        let xs: Vec<f32> = mesh.vertices().iter().map(|v| v.position[0]).collect();
        let half = PATCH_EXTENT * 0.5;
        assert!(xs.iter().any(|&x| (x + half).abs() < 1e-4));
        assert!(xs.iter().any(|&x| (x - half).abs() < 1e-4));
    }

    #[test]
    fn parallel_sampling_matches_sequential_order() {
        let field = test_field();
        let mesh = tessellate(&field, 3, 2);

        // rebuild the expected stream sequentially
        let mut expected = Vec::new();
        for row in 0..3 {
            for col in 0..=2 {
                let u = col as f32 / 2.0;
                expected.push(field.sample_vertex(u, row as f32 / 3.0));
                expected.push(field.sample_vertex(u, (row + 1) as f32 / 3.0));
            }
        }

        for (got, want) in mesh.vertices().iter().zip(&expected) {
            assert_eq!(got.position, want.position);
            assert_eq!(got.normal, want.normal);
        }
    }

    #[test]
    fn autodiff_surface_normals_match_analytic() {
        // r(u, v) = (u, sin(pi u), v): du x dv = (pi cos(pi u), -1, 0)
        struct Wave;
        impl ParametricSurface for Wave {
            fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
                let pi = Dual::constant(std::f32::consts::PI);
                [u, (u * pi).sin(), v]
            }
        }

        let surface = AutoDiffSurface(Wave);
        let vertex = surface.sample_vertex(0.25, 0.5);

        let pi = std::f32::consts::PI;
        let expected = Vec3::new(pi * (pi * 0.25).cos(), -1.0, 0.0).normalize();
        let got = Vec3::from_array(vertex.normal);
        assert!(
            (got - expected).length() < 1e-4,
            "autodiff normal {:?} != analytic {:?}",
            got,
            expected
        );
    }
}
