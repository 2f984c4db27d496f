use crate::domain::{Light, Scene};
use crate::march::{shadow_factor, Hit};
use crate::math::Vec3;

pub const AMBIENT: Vec3 = Vec3::splat(17.0);
pub const SHADOW_SOFTNESS: f32 = 16.0;

/// Color of the surface at `hit`.
///
/// With shading disabled this is the raw material color of the nearest
/// object. Otherwise every light contributes a shadowed diffuse term on top
/// of [`AMBIENT`]. The result is not clamped and may exceed 255.
pub fn shade(scene: &Scene, hit: &Hit) -> Vec3 {
    let object = scene.object(hit.object);
    let base_color = scene.material(object.shape.material(hit.position)).color;
    if !scene.shading() {
        return base_color;
    }

    let normal = object.shape.normal(hit.position);
    scene
        .lights()
        .iter()
        .fold(AMBIENT, |color, light| {
            let shadow = shadow_factor(scene, hit.position, normal, light, SHADOW_SOFTNESS);
            color + diffuse(base_color, normal, light, hit.position, shadow)
        })
}

pub fn diffuse(base_color: Vec3, normal: Vec3, light: &Light, point: Vec3, shadow: f32) -> Vec3 {
    let brightness = light.light_vector(point).dot(normal).clamp(0.0, 1.0) * shadow * light.intensity();
    let light_color = light.color() / 255.0;
    base_color * light_color * brightness
}
