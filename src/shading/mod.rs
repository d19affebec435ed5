// Per-draw shading state and Phong-Blinn reflectance

pub mod reflectance;
pub mod state;

pub use reflectance::evaluate_reflectance;
pub use state::{ShadingState, MAX_LIGHTS};
