use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::ops::Range;

/// GPU-ready vertex layout: position, normal, and a scalar height attribute.
///
/// The height starts as the raw sampled elevation and is remapped to [0, 1]
/// by the tessellator's normalization pass before the mesh is handed out.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub height: f32,
}

impl TerrainVertex {
    pub fn new(position: Vec3, normal: Vec3, height: f32) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            height,
        }
    }
}

/// A vertex stream organized as consecutive triangle strips.
///
/// Strip `i` covers the parametric band from row `i/N` to `(i+1)/N` and owns
/// the contiguous vertex range returned by [`StripMesh::strip_ranges`]; the
/// external draw collaborator issues one strip draw per range.
#[derive(Debug, Clone, Default)]
pub struct StripMesh {
    vertices: Vec<TerrainVertex>,
    strips: usize,
    verts_per_strip: usize,
}

impl StripMesh {
    pub fn new(vertices: Vec<TerrainVertex>, strips: usize, verts_per_strip: usize) -> Self {
        debug_assert_eq!(vertices.len(), strips * verts_per_strip);
        Self {
            vertices,
            strips,
            verts_per_strip,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [TerrainVertex] {
        &mut self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn strips(&self) -> usize {
        self.strips
    }

    pub fn verts_per_strip(&self) -> usize {
        self.verts_per_strip
    }

    /// Per-strip draw ranges: `strips` consecutive ranges of
    /// `verts_per_strip` vertices that partition the buffer with no gaps or
    /// overlaps.
    pub fn strip_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.strips)
            .map(move |i| i * self.verts_per_strip..(i + 1) * self.verts_per_strip)
    }

    /// Raw bytes of the vertex stream, for upload by the external GPU buffer
    /// collaborator.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
