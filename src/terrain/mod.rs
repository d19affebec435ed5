// Terrain synthesis and tessellation

pub mod height_field;
pub mod mesh;
pub mod tessellator;
pub mod texture;

pub use height_field::{spectral_weight, HeightField, HeightFieldConfig, SurfaceSample};
pub use mesh::{StripMesh, TerrainVertex};
pub use tessellator::{tessellate, AutoDiffSurface, SurfaceSampler, TESSELLATION_LEVEL};
pub use texture::CheckerTexture;
