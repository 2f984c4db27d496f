mod csg_gallery;
mod desk;
mod mesh_on_plane;
mod orange_sphere;
mod sphere_on_plane;

use log::debug;

use crate::domain::{Scene, SceneOptions};
use crate::error::{Error, Result};

pub const SCENE_IDS: [&str; 5] = [
    orange_sphere::SCENE_ID,
    sphere_on_plane::SCENE_ID,
    desk::SCENE_ID,
    csg_gallery::SCENE_ID,
    mesh_on_plane::SCENE_ID,
];

pub fn build_scene(scene_id: &str, options: &SceneOptions) -> Result<Scene> {
    debug!("Building preset scene '{scene_id}'");
    if scene_id.eq_ignore_ascii_case(orange_sphere::SCENE_ID) {
        return orange_sphere::build(options);
    }
    if scene_id.eq_ignore_ascii_case(sphere_on_plane::SCENE_ID) {
        return sphere_on_plane::build(options);
    }
    if scene_id.eq_ignore_ascii_case(desk::SCENE_ID) {
        return desk::build(options);
    }
    if scene_id.eq_ignore_ascii_case(csg_gallery::SCENE_ID) {
        return csg_gallery::build(options);
    }
    if scene_id.eq_ignore_ascii_case(mesh_on_plane::SCENE_ID) {
        return mesh_on_plane::build(options);
    }

    Err(Error::UnknownScene(scene_id.to_string()))
}
