use crate::config::{vec3_from, RenderFrameConfig};
use crate::math::Vec3;
use crate::ray::Ray;

const VERTICAL_EXTENT: f32 = 0.5625;

/// Pinhole camera looking along +Y; image rows run toward +Z.
#[derive(Clone, Copy, Debug)]
pub struct View {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fov: f32,
}

impl View {
    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        Self {
            position: vec3_from(frame.camera_position),
            rotation: vec3_from(frame.camera_rotation),
            fov: frame.fov,
        }
    }

    pub fn initial_velocity(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        Vec3::new(
            cast(x as f32, 0.0, width as f32 * self.fov, -1.0, 1.0),
            1.0,
            cast(
                y as f32,
                0.0,
                height as f32 * self.fov,
                -VERTICAL_EXTENT,
                VERTICAL_EXTENT,
            ),
        ) + self.rotation
    }

    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        Ray::new(self.initial_velocity(x, y, width, height), self.position)
    }
}

fn cast(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    (((value - old_min) * (new_max - new_min)) / (old_max - old_min)) + new_min
}
