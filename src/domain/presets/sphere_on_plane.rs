use crate::domain::{Light, Material, MaterialId, Object, Scene, SceneOptions};
use crate::error::Result;
use crate::math::Vec3;
use crate::sdf::{Axis, Sdf};

pub const SCENE_ID: &str = "sphere_on_plane";

pub fn build(options: &SceneOptions) -> Result<Scene> {
    let ground_material = MaterialId(0);
    let sphere_material = MaterialId(1);

    Scene::new(
        SCENE_ID,
        vec![
            Object::new("ground", Sdf::plane(Axis::Z, 0.0, ground_material)),
            Object::new(
                "sphere",
                Sdf::sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, sphere_material),
            ),
        ],
        vec![
            Material::new("blue", Vec3::new(4.0, 111.0, 147.0)),
            Material::new("orange", Vec3::new(177.0, 103.0, 57.0)),
        ],
        vec![Light::point(
            "key",
            Vec3::new(0.0, -2.0, -2.0),
            2.0,
            Vec3::splat(255.0),
        )],
        options,
    )
}
