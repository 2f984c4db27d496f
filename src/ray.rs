use crate::math::{Normalized, Vec3};

/// A ray advanced in place by sphere tracing.
///
/// The heading is normalized on construction. A zero velocity yields a zero
/// heading: stepping such a ray accumulates `traveled` but never moves it.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    position: Vec3,
    direction: Vec3,
    degenerate: bool,
    traveled: f32,
}

impl Ray {
    pub fn new(velocity: Vec3, position: Vec3) -> Self {
        let mut ray = Self {
            position,
            direction: Vec3::ZERO,
            degenerate: true,
            traveled: 0.0,
        };
        ray.set_direction(velocity);
        ray
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_direction(&mut self, velocity: Vec3) {
        let normalized = velocity.try_normalize();
        self.degenerate = normalized.is_zero();
        self.direction = match normalized {
            Normalized::Unit(direction) => direction,
            Normalized::Zero => Vec3::ZERO,
        };
    }

    pub fn reset_distance(&mut self) {
        self.traveled = 0.0;
    }

    pub fn step(&mut self, distance: f32) {
        self.position += self.direction * distance;
        self.traveled += distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction_normalizes_velocity() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, 1.0));
        assert!(!ray.is_degenerate());
        assert_eq!(ray.traveled(), 0.0);
    }

    #[test]
    fn step_moves_position_and_accumulates_distance() {
        let mut ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        ray.step(1.5);
        ray.step(0.5);
        assert_abs_diff_eq!(ray.position().x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ray.position().y, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ray.traveled(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_velocity_ray_never_moves() {
        let origin = Vec3::new(1.0, 1.0, 1.0);
        let mut ray = Ray::new(Vec3::ZERO, origin);
        assert!(ray.is_degenerate());
        ray.step(3.0);
        assert_eq!(ray.position(), origin);
        assert_eq!(ray.traveled(), 3.0);
    }

    #[test]
    fn reset_distance_keeps_position_and_heading() {
        let mut ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        ray.step(4.0);
        ray.reset_distance();
        assert_eq!(ray.traveled(), 0.0);
        assert_eq!(ray.position(), Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(ray.direction(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn redirecting_to_zero_marks_ray_degenerate() {
        let mut ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        ray.set_direction(Vec3::ZERO);
        assert!(ray.is_degenerate());
        ray.set_position(Vec3::new(5.0, 0.0, 0.0));
        ray.step(1.0);
        assert_eq!(ray.position(), Vec3::new(5.0, 0.0, 0.0));
    }
}
