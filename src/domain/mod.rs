pub mod description;
pub mod light;
pub mod material;
pub mod object;
pub mod presets;
pub mod scene;
pub mod validation;

pub use description::SceneDescription;
pub use light::{Light, LightKind};
pub use material::{Material, MaterialId};
pub use object::Object;
pub use scene::{ObjectHandle, Scene, SceneOptions, SceneSample};
