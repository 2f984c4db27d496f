pub mod mesh;
pub mod primitives;

pub use mesh::{Mesh, Triangle};
pub use primitives::{Axis, Primitive};

use crate::domain::MaterialId;
use crate::math::Vec3;

pub const NORMAL_EPSILON: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SdfSample {
    pub distance: f32,
    pub material: MaterialId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Union,
    Intersection,
    Difference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
}

impl Combinator {
    /// Ties go to the first child.
    fn combine(self, da: f32, db: f32) -> (f32, Side) {
        match self {
            Self::Union => {
                if da <= db {
                    (da, Side::A)
                } else {
                    (db, Side::B)
                }
            }
            Self::Intersection => {
                if da >= db {
                    (da, Side::A)
                } else {
                    (db, Side::B)
                }
            }
            // The flipped value drives the choice, so the cut face is
            // painted with A's material.
            Self::Difference => {
                if -da >= db {
                    (-da, Side::A)
                } else {
                    (db, Side::B)
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Sdf {
    Primitive {
        shape: Primitive,
        material: MaterialId,
    },
    Binary {
        op: Combinator,
        a: Box<Sdf>,
        b: Box<Sdf>,
    },
    Scale {
        child: Box<Sdf>,
        factors: Vec3,
        pivot: Vec3,
    },
}

impl Sdf {
    pub fn primitive(shape: Primitive, material: MaterialId) -> Self {
        Self::Primitive { shape, material }
    }

    pub fn sphere(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self::primitive(Primitive::Sphere { center, radius }, material)
    }

    pub fn torus(center: Vec3, major_radius: f32, minor_radius: f32, material: MaterialId) -> Self {
        Self::primitive(
            Primitive::Torus {
                center,
                major_radius,
                minor_radius,
            },
            material,
        )
    }

    pub fn cylinder(center: Vec3, height: f32, radius: f32, material: MaterialId) -> Self {
        Self::primitive(
            Primitive::Cylinder {
                center,
                height,
                radius,
            },
            material,
        )
    }

    pub fn cube(center: Vec3, side_length: f32, material: MaterialId) -> Self {
        Self::primitive(
            Primitive::Cube {
                center,
                half_extent: side_length / 2.0,
            },
            material,
        )
    }

    pub fn cuboid(center: Vec3, side_lengths: Vec3, material: MaterialId) -> Self {
        Self::primitive(
            Primitive::Box {
                center,
                half_extents: side_lengths / 2.0,
            },
            material,
        )
    }

    pub fn round_box(center: Vec3, side_lengths: Vec3, radius: f32, material: MaterialId) -> Self {
        Self::primitive(
            Primitive::RoundBox {
                center,
                half_extents: side_lengths / 2.0,
                radius,
            },
            material,
        )
    }

    pub fn plane(axis: Axis, offset: f32, material: MaterialId) -> Self {
        Self::primitive(Primitive::Plane { axis, offset }, material)
    }

    pub fn mesh(mesh: Mesh, material: MaterialId) -> Self {
        Self::primitive(Primitive::Mesh(mesh), material)
    }

    pub fn union(a: Sdf, b: Sdf) -> Self {
        Self::binary(Combinator::Union, a, b)
    }

    pub fn intersection(a: Sdf, b: Sdf) -> Self {
        Self::binary(Combinator::Intersection, a, b)
    }

    /// `max(-a, b)`: the solid of `b` with `a` carved out of it.
    pub fn difference(a: Sdf, b: Sdf) -> Self {
        Self::binary(Combinator::Difference, a, b)
    }

    fn binary(op: Combinator, a: Sdf, b: Sdf) -> Self {
        Self::Binary {
            op,
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    pub fn scaled(child: Sdf, factors: Vec3) -> Self {
        let pivot = child.position();
        Self::Scale {
            child: Box::new(child),
            factors,
            pivot,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Self::Primitive { shape, .. } => shape.position(),
            Self::Binary { a, .. } => a.position(),
            Self::Scale { pivot, .. } => *pivot,
        }
    }

    pub fn sample(&self, p: Vec3) -> SdfSample {
        match self {
            Self::Primitive { shape, material } => SdfSample {
                distance: shape.distance(p),
                material: *material,
            },
            Self::Binary { op, a, b } => {
                let sample_a = a.sample(p);
                let sample_b = b.sample(p);
                let (distance, side) = op.combine(sample_a.distance, sample_b.distance);
                let material = match side {
                    Side::A => sample_a.material,
                    Side::B => sample_b.material,
                };
                SdfSample { distance, material }
            }
            Self::Scale {
                child,
                factors,
                pivot,
            } => child.sample(scale_point(p, *factors, *pivot)),
        }
    }

    pub fn distance(&self, p: Vec3) -> f32 {
        match self {
            Self::Primitive { shape, .. } => shape.distance(p),
            Self::Binary { op, a, b } => op.combine(a.distance(p), b.distance(p)).0,
            Self::Scale {
                child,
                factors,
                pivot,
            } => child.distance(scale_point(p, *factors, *pivot)),
        }
    }

    pub fn material(&self, p: Vec3) -> MaterialId {
        self.sample(p).material
    }

    /// Approximate outward surface normal at `p`.
    ///
    /// Primitives differentiate only their own field. Boolean nodes defer to
    /// the child that wins at `p`, so normals are not smooth across seams.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        match self {
            Self::Primitive { shape, .. } => estimate_normal(|q| shape.distance(q), p),
            Self::Binary { op, a, b } => match op.combine(a.distance(p), b.distance(p)).1 {
                Side::A => a.normal(p),
                Side::B => b.normal(p),
            },
            Self::Scale { .. } => estimate_normal(|q| self.distance(q), p),
        }
    }

    pub fn for_each_material(&self, visit: &mut impl FnMut(MaterialId)) {
        match self {
            Self::Primitive { material, .. } => visit(*material),
            Self::Binary { a, b, .. } => {
                a.for_each_material(visit);
                b.for_each_material(visit);
            }
            Self::Scale { child, .. } => child.for_each_material(visit),
        }
    }

    pub fn for_each_node<'a>(&'a self, visit: &mut impl FnMut(&'a Sdf)) {
        visit(self);
        match self {
            Self::Primitive { .. } => {}
            Self::Binary { a, b, .. } => {
                a.for_each_node(visit);
                b.for_each_node(visit);
            }
            Self::Scale { child, .. } => child.for_each_node(visit),
        }
    }
}

fn scale_point(p: Vec3, factors: Vec3, pivot: Vec3) -> Vec3 {
    ((p - pivot) / factors) + pivot
}

pub fn estimate_normal(field: impl Fn(Vec3) -> f32, p: Vec3) -> Vec3 {
    let e = NORMAL_EPSILON;
    let d = field(p);
    Vec3::new(
        d - field(p - Vec3::new(e, 0.0, 0.0)),
        d - field(p - Vec3::new(0.0, e, 0.0)),
        d - field(p - Vec3::new(0.0, 0.0, e)),
    )
    .normalize()
}
