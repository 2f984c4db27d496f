use crate::domain::{Light, ObjectHandle, Scene};
use crate::math::Vec3;
use crate::ray::Ray;

const SHADOW_FINE_STEP_THRESHOLD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub position: Vec3,
    pub traveled: f32,
    pub object: ObjectHandle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarchOutcome {
    Hit(Hit),
    Miss,
}

impl MarchOutcome {
    pub fn hit(self) -> Option<Hit> {
        match self {
            Self::Hit(hit) => Some(hit),
            Self::Miss => None,
        }
    }
}

/// Advances `ray` until it comes within the scene's minimum distance of a
/// surface or has traveled the maximum distance.
///
/// A ray that starts inside the hit threshold never enters the loop and is
/// reported as a miss.
pub fn march(scene: &Scene, mut ray: Ray) -> MarchOutcome {
    let min_distance = scene.min_distance();
    let max_distance = scene.max_distance();

    let mut sample = scene.sample(ray.position());
    while sample.distance > min_distance && ray.traveled() < max_distance {
        ray.step(sample.distance);
        if ray.traveled() >= max_distance {
            return MarchOutcome::Miss;
        }

        sample = scene.sample(ray.position());
        if sample.distance <= min_distance {
            ray.step(sample.distance);
            return MarchOutcome::Hit(Hit {
                position: ray.position(),
                traveled: ray.traveled(),
                object: sample.object,
            });
        }
    }

    MarchOutcome::Miss
}

/// Soft occlusion of `light` as seen from a surface `point` with `normal`.
///
/// Returns 0 when the shadow ray is stopped before covering the straight-line
/// distance to the light, otherwise the running penumbra estimate in
/// `[0, 1]`. Larger `softness` gives harder shadow edges.
pub fn shadow_factor(scene: &Scene, point: Vec3, normal: Vec3, light: &Light, softness: f32) -> f32 {
    let min_distance = scene.min_distance();
    let max_distance = scene.max_distance();

    let origin = point + (normal * (min_distance * 2.0));
    let mut shadow_ray = Ray::new(light.light_vector(origin), origin);

    let mut brightness: f32 = 1.0;
    let mut d = scene.distance(shadow_ray.position());
    while d > min_distance && shadow_ray.traveled() < max_distance {
        if d <= SHADOW_FINE_STEP_THRESHOLD {
            shadow_ray.step(d * 0.5);
        } else {
            shadow_ray.step(d);
        }
        brightness = brightness.min((d / shadow_ray.traveled()) * softness);
        d = scene.distance(shadow_ray.position());
    }

    if shadow_ray.traveled() >= point.distance(light.position()) {
        brightness
    } else {
        0.0
    }
}
