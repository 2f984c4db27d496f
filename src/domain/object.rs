use crate::sdf::Sdf;

#[derive(Clone, Debug)]
pub struct Object {
    pub name: String,
    pub shape: Sdf,
}

impl Object {
    pub fn new(name: impl Into<String>, shape: Sdf) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}
