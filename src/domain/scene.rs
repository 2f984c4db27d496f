use std::path::PathBuf;

use crate::error::Result;
use crate::math::Vec3;

use super::validation::validate_scene;
use super::{Light, Material, MaterialId, Object};

#[derive(Clone, Debug)]
pub struct SceneOptions {
    pub min_distance: f32,
    pub max_distance: f32,
    pub shading: bool,
    pub mesh_path: Option<PathBuf>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            min_distance: 0.001,
            max_distance: 25.0,
            shading: true,
            mesh_path: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub usize);

/// Minimum distance over all objects and the first object reaching it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSample {
    pub distance: f32,
    pub object: ObjectHandle,
}

/// Immutable after construction, so it can be shared across render workers.
#[derive(Clone, Debug)]
pub struct Scene {
    id: String,
    objects: Vec<Object>,
    materials: Vec<Material>,
    lights: Vec<Light>,
    min_distance: f32,
    max_distance: f32,
    shading: bool,
}

impl Scene {
    /// Validates and assembles a scene; every handle is resolvable afterwards.
    pub fn new(
        id: impl Into<String>,
        objects: Vec<Object>,
        materials: Vec<Material>,
        lights: Vec<Light>,
        options: &SceneOptions,
    ) -> Result<Self> {
        let scene = Self {
            id: id.into(),
            objects,
            materials,
            lights,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            shading: options.shading,
        };
        validate_scene(&scene)?;
        Ok(scene)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn shading(&self) -> bool {
        self.shading
    }

    pub fn sample(&self, p: Vec3) -> SceneSample {
        let mut closest = SceneSample {
            distance: f32::INFINITY,
            object: ObjectHandle(0),
        };
        for (index, object) in self.objects.iter().enumerate() {
            let distance = object.shape.distance(p);
            if distance < closest.distance {
                closest = SceneSample {
                    distance,
                    object: ObjectHandle(index),
                };
            }
        }
        closest
    }

    pub fn distance(&self, p: Vec3) -> f32 {
        self.sample(p).distance
    }

    pub fn object(&self, handle: ObjectHandle) -> &Object {
        &self.objects[handle.0]
    }

    pub fn nearest_object(&self, sample: &SceneSample) -> &Object {
        self.object(sample.object)
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }
}
