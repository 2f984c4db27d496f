use crate::domain::{Light, Material, MaterialId, Object, Scene, SceneOptions};
use crate::error::Result;
use crate::math::Vec3;
use crate::sdf::{Axis, Sdf};

pub const SCENE_ID: &str = "csg_gallery";

pub fn build(options: &SceneOptions) -> Result<Scene> {
    let floor = MaterialId(0);
    let orange = MaterialId(1);
    let yellow = MaterialId(2);
    let green = MaterialId(3);
    let light_wood = MaterialId(4);

    let carved_cube = Sdf::difference(
        Sdf::sphere(Vec3::new(-0.4, 1.5, -0.3), 0.32, orange),
        Sdf::cube(Vec3::new(-0.4, 1.5, -0.3), 0.5, yellow),
    );
    let lens = Sdf::intersection(
        Sdf::sphere(Vec3::new(0.3, 1.5, -0.3), 0.3, green),
        Sdf::sphere(Vec3::new(0.45, 1.5, -0.3), 0.3, yellow),
    );
    let capsule_pair = Sdf::union(
        Sdf::sphere(Vec3::new(1.0, 1.6, -0.45), 0.18, orange),
        Sdf::cylinder(Vec3::new(1.0, 1.6, -0.2), 0.2, 0.12, light_wood),
    );
    let stretched_box = Sdf::scaled(
        Sdf::round_box(Vec3::new(0.0, 2.6, -0.4), Vec3::splat(0.4), 0.05, light_wood),
        Vec3::new(2.0, 1.0, 1.0),
    );

    Scene::new(
        SCENE_ID,
        vec![
            Object::new("ground", Sdf::plane(Axis::Z, 0.0, floor)),
            Object::new(
                "torus",
                Sdf::torus(Vec3::new(-1.1, 1.6, -0.12), 0.25, 0.08, yellow),
            ),
            Object::new("carved_cube", carved_cube),
            Object::new("lens", lens),
            Object::new("capsule_pair", capsule_pair),
            Object::new("stretched_box", stretched_box),
        ],
        vec![
            Material::new("blue", Vec3::new(4.0, 111.0, 147.0)),
            Material::new("orange", Vec3::new(177.0, 103.0, 57.0)),
            Material::new("yellow", Vec3::new(229.0, 169.0, 59.0)),
            Material::new("green", Vec3::new(83.0, 149.0, 67.0)),
            Material::new("light_wood", Vec3::new(195.0, 178.0, 159.0)),
        ],
        vec![
            Light::point("key", Vec3::new(-1.0, -1.0, -2.0), 2.0, Vec3::splat(255.0)),
            Light::point("fill", Vec3::new(1.5, 0.0, -1.5), 1.0, Vec3::new(255.0, 230.0, 200.0)),
        ],
        options,
    )
}
