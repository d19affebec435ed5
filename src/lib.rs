#![warn(clippy::all, rust_2018_idioms)]

pub mod dual;
pub mod scene;
pub mod shading;
pub mod terrain;

pub use scene::Scene;
pub use shading::ShadingState;
pub use terrain::{HeightField, HeightFieldConfig, StripMesh};
