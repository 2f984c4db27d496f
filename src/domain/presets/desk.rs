use crate::domain::{Light, Material, MaterialId, Object, Scene, SceneOptions};
use crate::error::Result;
use crate::math::Vec3;
use crate::sdf::{Axis, Sdf};

pub const SCENE_ID: &str = "desk";

pub fn build(options: &SceneOptions) -> Result<Scene> {
    let dark_wood = MaterialId(0);
    let light_wood = MaterialId(1);
    let floor = MaterialId(2);

    // (name, center, full side lengths, material)
    let boxes = [
        ("desk_top_upper", Vec3::new(0.0, 0.0, -0.6), Vec3::new(2.0, 0.5, 0.05), dark_wood),
        ("desk_top_lower", Vec3::new(0.0, 0.0, -0.55), Vec3::new(2.0, 0.5, 0.05), dark_wood),
        ("leg_left", Vec3::new(-0.9, 0.0, -0.26), Vec3::new(0.05, 0.4, 0.55), dark_wood),
        ("leg_middle", Vec3::new(-0.4, 0.0, -0.26), Vec3::new(0.05, 0.4, 0.55), dark_wood),
        ("leg_right", Vec3::new(0.9, 0.0, -0.26), Vec3::new(0.05, 0.4, 0.55), dark_wood),
        ("drawer_upper", Vec3::new(-0.65, 0.0, -0.425), Vec3::new(0.45, 0.37, 0.2), light_wood),
        ("drawer_lower", Vec3::new(-0.65, 0.0, -0.175), Vec3::new(0.45, 0.37, 0.2), light_wood),
        ("drawer_divider", Vec3::new(-0.65, 0.0, -0.3), Vec3::new(0.45, 0.4, 0.05), dark_wood),
        ("drawer_base", Vec3::new(-0.65, 0.0, -0.05), Vec3::new(0.45, 0.4, 0.05), dark_wood),
    ];

    let mut objects = vec![Object::new("ground", Sdf::plane(Axis::Z, 0.0, floor))];
    objects.extend(
        boxes
            .into_iter()
            .map(|(name, center, sides, material)| {
                Object::new(name, Sdf::cuboid(center, sides, material))
            }),
    );

    let white = Vec3::splat(255.0);
    Scene::new(
        SCENE_ID,
        objects,
        vec![
            Material::new("dark_wood", Vec3::new(77.0, 32.0, 21.0)),
            Material::new("light_wood", Vec3::new(195.0, 178.0, 159.0)),
            Material::new("blue", Vec3::new(4.0, 111.0, 147.0)),
        ],
        vec![
            Light::point("side_left", Vec3::new(-1.0, -1.0, -1.0), 2.0, white),
            Light::point("side_right", Vec3::new(1.0, -1.0, -1.0), 2.0, white),
            Light::point("top", Vec3::new(0.0, 0.0, -2.0), 2.0, white),
        ],
        options,
    )
}
