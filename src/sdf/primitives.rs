use std::str::FromStr;

use crate::error::Error;
use crate::math::Vec3;

use super::mesh::Mesh;

pub const PLANE_HALF_THICKNESS: f32 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::new(1.0, 0.0, 0.0),
            Self::Y => Vec3::new(0.0, 1.0, 0.0),
            Self::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("x") => Ok(Self::X),
            v if v.eq_ignore_ascii_case("y") => Ok(Self::Y),
            v if v.eq_ignore_ascii_case("z") => Ok(Self::Z),
            _ => Err(Error::InvalidPlaneAxis(value.to_string())),
        }
    }
}

/// Leaf shapes. Each one measures distance in a frame whose origin is its
/// own position parameter.
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Torus {
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
    },
    Cylinder {
        center: Vec3,
        height: f32,
        radius: f32,
    },
    Cube {
        center: Vec3,
        half_extent: f32,
    },
    Box {
        center: Vec3,
        half_extents: Vec3,
    },
    RoundBox {
        center: Vec3,
        half_extents: Vec3,
        radius: f32,
    },
    Plane {
        axis: Axis,
        offset: f32,
    },
    Mesh(Mesh),
}

impl Primitive {
    pub fn distance(&self, p: Vec3) -> f32 {
        match self {
            Self::Sphere { center, radius } => sd_sphere(p - *center, *radius),
            Self::Torus {
                center,
                major_radius,
                minor_radius,
            } => sd_torus(p - *center, *major_radius, *minor_radius),
            Self::Cylinder {
                center,
                height,
                radius,
            } => sd_capped_cylinder(p - *center, *height, *radius),
            Self::Cube {
                center,
                half_extent,
            } => sd_box(p - *center, Vec3::splat(*half_extent)),
            Self::Box {
                center,
                half_extents,
            } => sd_box(p - *center, *half_extents),
            Self::RoundBox {
                center,
                half_extents,
                radius,
            } => sd_box(p - *center, *half_extents) - *radius,
            Self::Plane { axis, offset } => {
                (axis.component(p) - *offset).abs() - PLANE_HALF_THICKNESS
            }
            Self::Mesh(mesh) => mesh.distance(p),
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Self::Sphere { center, .. }
            | Self::Torus { center, .. }
            | Self::Cylinder { center, .. }
            | Self::Cube { center, .. }
            | Self::Box { center, .. }
            | Self::RoundBox { center, .. } => *center,
            Self::Plane { axis, offset } => axis.unit() * *offset,
            Self::Mesh(mesh) => mesh.position(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Cylinder { .. } => "cylinder",
            Self::Cube { .. } => "cube",
            Self::Box { .. } => "box",
            Self::RoundBox { .. } => "round box",
            Self::Plane { .. } => "plane",
            Self::Mesh(_) => "mesh",
        }
    }
}

fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

fn sd_torus(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let qx = p.length_xy() - major_radius;
    ((qx * qx) + (p.z * p.z)).sqrt() - minor_radius
}

// Bound rather than exact near the cap rims.
fn sd_capped_cylinder(p: Vec3, height: f32, radius: f32) -> f32 {
    let radial = p.length_xy() - radius;
    let bottom = (-(p.z + (height / 2.0))).max(radial);
    (p.z - (height / 2.0)).max(bottom)
}

// Exact outside the face-normal cones only.
fn sd_box(p: Vec3, half_extents: Vec3) -> f32 {
    (p.abs() - half_extents).max_component()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sphere_distance_matches_formula() {
        let sphere = Primitive::Sphere {
            center: Vec3::new(1.0, -2.0, 0.5),
            radius: 0.75,
        };
        for p in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 1.0, -3.0),
            Vec3::new(1.0, -2.0, 1.25),
        ] {
            let expected = p.distance(Vec3::new(1.0, -2.0, 0.5)) - 0.75;
            assert_abs_diff_eq!(sphere.distance(p), expected, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(
            sphere.distance(Vec3::new(1.0, -2.0, 0.5)),
            -0.75,
            epsilon = 1e-6
        );
    }

    #[test]
    fn torus_is_zero_on_its_ring() {
        let torus = Primitive::Torus {
            center: Vec3::new(0.0, 0.0, -1.0),
            major_radius: 1.0,
            minor_radius: 0.25,
        };
        assert_abs_diff_eq!(
            torus.distance(Vec3::new(1.25, 0.0, -1.0)),
            0.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            torus.distance(Vec3::new(0.0, 0.0, -1.0)),
            0.75,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            torus.distance(Vec3::new(0.0, 1.0, -1.0)),
            -0.25,
            epsilon = 1e-6
        );
    }

    #[test]
    fn cylinder_combines_radial_and_cap_planes() {
        let cylinder = Primitive::Cylinder {
            center: Vec3::ZERO,
            height: 2.0,
            radius: 0.5,
        };
        assert_abs_diff_eq!(cylinder.distance(Vec3::ZERO), -0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(
            cylinder.distance(Vec3::new(0.0, 0.0, 3.0)),
            2.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            cylinder.distance(Vec3::new(2.0, 0.0, 0.0)),
            1.5,
            epsilon = 1e-6
        );
        // Beyond the rim the bound takes the larger of the two gaps.
        assert_abs_diff_eq!(
            cylinder.distance(Vec3::new(1.5, 0.0, 2.0)),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn box_uses_largest_axis_gap() {
        let cuboid = Primitive::Box {
            center: Vec3::new(0.0, 0.0, -1.0),
            half_extents: Vec3::new(1.0, 0.25, 0.5),
        };
        assert_abs_diff_eq!(
            cuboid.distance(Vec3::new(0.0, 2.0, -1.0)),
            1.75,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            cuboid.distance(Vec3::new(0.0, 0.0, -1.0)),
            -0.25,
            epsilon = 1e-6
        );
    }

    #[test]
    fn round_box_subtracts_radius() {
        let round = Primitive::RoundBox {
            center: Vec3::ZERO,
            half_extents: Vec3::splat(0.5),
            radius: 0.1,
        };
        let cube = Primitive::Cube {
            center: Vec3::ZERO,
            half_extent: 0.5,
        };
        let p = Vec3::new(2.0, 0.3, -0.2);
        assert_abs_diff_eq!(round.distance(p), cube.distance(p) - 0.1, epsilon = 1e-6);
    }

    #[test]
    fn plane_is_a_thin_slab() {
        let plane = Primitive::Plane {
            axis: Axis::Z,
            offset: 0.0,
        };
        assert_abs_diff_eq!(
            plane.distance(Vec3::new(3.0, -7.0, -1.0)),
            0.98,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            plane.distance(Vec3::new(0.0, 0.0, 1.0)),
            0.98,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(plane.distance(Vec3::ZERO), -0.02, epsilon = 1e-6);
    }

    #[test]
    fn parses_axis_names() {
        assert_eq!("X".parse::<Axis>().expect("x axis"), Axis::X);
        assert_eq!("y".parse::<Axis>().expect("y axis"), Axis::Y);
        assert_eq!(" Z ".parse::<Axis>().expect("z axis"), Axis::Z);
    }

    #[test]
    fn rejects_unknown_axis() {
        let error = "W".parse::<Axis>().expect_err("W is not an axis");
        assert!(matches!(error, Error::InvalidPlaneAxis(ref axis) if axis == "W"));
    }
}
