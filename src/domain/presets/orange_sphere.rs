use crate::domain::{Material, MaterialId, Object, Scene, SceneOptions};
use crate::error::Result;
use crate::math::Vec3;
use crate::sdf::Sdf;

pub const SCENE_ID: &str = "orange_sphere";

pub const ORANGE: Vec3 = Vec3::new(177.0, 103.0, 57.0);

pub fn build(options: &SceneOptions) -> Result<Scene> {
    Scene::new(
        SCENE_ID,
        vec![Object::new(
            "sphere",
            Sdf::sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0)),
        )],
        vec![Material::new("orange", ORANGE)],
        Vec::new(),
        options,
    )
}
