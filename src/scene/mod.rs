// Scene composition: camera, lights, materials, objects

pub mod camera;
pub mod light;
pub mod material;
pub mod object;
#[allow(clippy::module_inception)]
pub mod scene;

pub use camera::Camera;
pub use light::Light;
pub use material::Material;
pub use object::SceneObject;
pub use scene::{Scene, ANIMATION_STEP};
