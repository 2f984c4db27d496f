use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: Vec3,
}

impl Material {
    pub fn new(name: impl Into<String>, color: Vec3) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
