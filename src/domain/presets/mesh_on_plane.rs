use crate::domain::{Light, Material, MaterialId, Object, Scene, SceneOptions};
use crate::error::{Error, Result};
use crate::math::Vec3;
use crate::sdf::{Axis, Mesh, Sdf};

pub const SCENE_ID: &str = "mesh_on_plane";

pub fn build(options: &SceneOptions) -> Result<Scene> {
    let path = options.mesh_path.as_deref().ok_or_else(|| {
        Error::InvalidConfig(format!("scene '{SCENE_ID}' requires meshPath to be set"))
    })?;
    let mesh = Mesh::load(path, Vec3::new(0.0, 0.0, -1.0), Vec3::splat(0.3))?;

    Scene::new(
        SCENE_ID,
        vec![
            Object::new("ground", Sdf::plane(Axis::Z, 0.0, MaterialId(0))),
            Object::new("mesh", Sdf::mesh(mesh, MaterialId(1))),
        ],
        vec![
            Material::new("blue", Vec3::new(4.0, 111.0, 147.0)),
            Material::new("orange", Vec3::new(177.0, 103.0, 57.0)),
        ],
        vec![Light::point(
            "side",
            Vec3::new(-1.0, -1.0, -1.0),
            2.0,
            Vec3::splat(255.0),
        )],
        options,
    )
}
