use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::math::Vec3;
use crate::sdf::{Axis, Mesh, Sdf};

use super::{Light, Material, MaterialId, Object, Scene, SceneOptions};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    #[serde(default = "default_scene_id")]
    pub id: String,
    pub materials: Vec<MaterialDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    pub objects: Vec<ObjectDescription>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MaterialDescription {
    pub name: String,
    pub color: Vec3,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LightDescription {
    pub name: String,
    pub position: Vec3,
    pub intensity: f32,
    #[serde(default = "default_light_color")]
    pub color: Vec3,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ObjectDescription {
    pub name: String,
    pub shape: ShapeDescription,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Torus {
        center: Vec3,
        #[serde(rename = "majorRadius")]
        major_radius: f32,
        #[serde(rename = "minorRadius")]
        minor_radius: f32,
        material: String,
    },
    Cylinder {
        center: Vec3,
        height: f32,
        radius: f32,
        material: String,
    },
    Cube {
        center: Vec3,
        #[serde(rename = "sideLength")]
        side_length: f32,
        material: String,
    },
    Box {
        center: Vec3,
        #[serde(rename = "sideLengths")]
        side_lengths: Vec3,
        material: String,
    },
    RoundBox {
        center: Vec3,
        #[serde(rename = "sideLengths")]
        side_lengths: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        axis: String,
        offset: f32,
        material: String,
    },
    Mesh {
        path: String,
        position: Vec3,
        #[serde(default = "default_mesh_scale")]
        scale: Vec3,
        material: String,
    },
    Union {
        a: Box<ShapeDescription>,
        b: Box<ShapeDescription>,
    },
    Intersection {
        a: Box<ShapeDescription>,
        b: Box<ShapeDescription>,
    },
    Difference {
        a: Box<ShapeDescription>,
        b: Box<ShapeDescription>,
    },
    Scale {
        child: Box<ShapeDescription>,
        factors: Vec3,
    },
}

fn default_scene_id() -> String {
    "inline".to_string()
}

const fn default_light_color() -> Vec3 {
    Vec3::splat(255.0)
}

const fn default_mesh_scale() -> Vec3 {
    Vec3::splat(1.0)
}

impl SceneDescription {
    pub fn build(&self, options: &SceneOptions) -> Result<Scene> {
        let mut material_ids = HashMap::with_capacity(self.materials.len());
        for (index, material) in self.materials.iter().enumerate() {
            if material_ids
                .insert(material.name.as_str(), MaterialId(index))
                .is_some()
            {
                return Err(Error::InvalidScene(format!(
                    "material '{}' is defined more than once",
                    material.name
                )));
            }
        }

        let objects = self
            .objects
            .iter()
            .map(|object| {
                let shape = object.shape.build(&material_ids)?;
                Ok(Object::new(object.name.clone(), shape))
            })
            .collect::<Result<Vec<_>>>()?;

        let materials = self
            .materials
            .iter()
            .map(|material| Material::new(material.name.clone(), material.color))
            .collect();
        let lights = self
            .lights
            .iter()
            .map(|light| Light::point(light.name.clone(), light.position, light.intensity, light.color))
            .collect();

        debug!(
            "Built inline scene '{}' with {} objects",
            self.id,
            self.objects.len()
        );
        Scene::new(self.id.clone(), objects, materials, lights, options)
    }
}

impl ShapeDescription {
    fn build(&self, material_ids: &HashMap<&str, MaterialId>) -> Result<Sdf> {
        let material = |name: &str| -> Result<MaterialId> {
            material_ids
                .get(name)
                .copied()
                .ok_or_else(|| Error::InvalidScene(format!("unknown material '{name}'")))
        };

        let shape = match self {
            Self::Sphere {
                center,
                radius,
                material: name,
            } => Sdf::sphere(*center, *radius, material(name)?),
            Self::Torus {
                center,
                major_radius,
                minor_radius,
                material: name,
            } => Sdf::torus(*center, *major_radius, *minor_radius, material(name)?),
            Self::Cylinder {
                center,
                height,
                radius,
                material: name,
            } => Sdf::cylinder(*center, *height, *radius, material(name)?),
            Self::Cube {
                center,
                side_length,
                material: name,
            } => Sdf::cube(*center, *side_length, material(name)?),
            Self::Box {
                center,
                side_lengths,
                material: name,
            } => Sdf::cuboid(*center, *side_lengths, material(name)?),
            Self::RoundBox {
                center,
                side_lengths,
                radius,
                material: name,
            } => Sdf::round_box(*center, *side_lengths, *radius, material(name)?),
            Self::Plane {
                axis,
                offset,
                material: name,
            } => Sdf::plane(axis.parse::<Axis>()?, *offset, material(name)?),
            Self::Mesh {
                path,
                position,
                scale,
                material: name,
            } => {
                let id = material(name)?;
                Sdf::mesh(Mesh::load(Path::new(path), *position, *scale)?, id)
            }
            Self::Union { a, b } => Sdf::union(a.build(material_ids)?, b.build(material_ids)?),
            Self::Intersection { a, b } => {
                Sdf::intersection(a.build(material_ids)?, b.build(material_ids)?)
            }
            Self::Difference { a, b } => {
                Sdf::difference(a.build(material_ids)?, b.build(material_ids)?)
            }
            Self::Scale { child, factors } => Sdf::scaled(child.build(material_ids)?, *factors),
        };
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SceneDescription {
        serde_json::from_str(json).expect("valid scene description")
    }

    #[test]
    fn builds_nested_combinators() {
        let description = parse(
            r#"{
                "materials": [
                    { "name": "orange", "color": [177, 103, 57] },
                    { "name": "blue", "color": [4, 111, 147] }
                ],
                "lights": [{ "name": "key", "position": [0, -2, -2], "intensity": 2 }],
                "objects": [
                    { "name": "ground", "shape": { "type": "plane", "axis": "Z", "offset": 0, "material": "blue" } },
                    { "name": "carved", "shape": {
                        "type": "scale",
                        "factors": [1, 1, 2],
                        "child": {
                            "type": "difference",
                            "a": { "type": "sphere", "center": [0, 0, -1], "radius": 0.3, "material": "blue" },
                            "b": { "type": "roundBox", "center": [0, 0, -1], "sideLengths": [0.5, 0.5, 0.5], "radius": 0.05, "material": "orange" }
                        }
                    } }
                ]
            }"#,
        );

        let scene = description
            .build(&SceneOptions::default())
            .expect("scene builds");
        assert_eq!(scene.id(), "inline");
        assert_eq!(scene.objects().len(), 2);
        assert_eq!(scene.lights()[0].color(), Vec3::splat(255.0));
        assert_eq!(scene.objects()[1].shape.position(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn invalid_plane_axis_fails_at_setup() {
        let description = parse(
            r#"{
                "materials": [{ "name": "blue", "color": [4, 111, 147] }],
                "objects": [
                    { "name": "ground", "shape": { "type": "plane", "axis": "W", "offset": 0, "material": "blue" } }
                ]
            }"#,
        );

        let error = description
            .build(&SceneOptions::default())
            .expect_err("axis W must be rejected");
        assert!(matches!(error, Error::InvalidPlaneAxis(ref axis) if axis == "W"));
    }

    #[test]
    fn unknown_material_name_is_rejected() {
        let description = parse(
            r#"{
                "materials": [{ "name": "blue", "color": [4, 111, 147] }],
                "objects": [
                    { "name": "ball", "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": "gold" } }
                ]
            }"#,
        );

        let error = description
            .build(&SceneOptions::default())
            .expect_err("gold is undefined");
        assert!(error.to_string().contains("unknown material 'gold'"));
    }

    #[test]
    fn duplicate_material_names_are_rejected() {
        let description = parse(
            r#"{
                "materials": [
                    { "name": "blue", "color": [4, 111, 147] },
                    { "name": "blue", "color": [0, 0, 255] }
                ],
                "objects": [
                    { "name": "ball", "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": "blue" } }
                ]
            }"#,
        );

        assert!(description.build(&SceneOptions::default()).is_err());
    }

    #[test]
    fn zero_scale_factor_is_rejected() {
        let description = parse(
            r#"{
                "materials": [{ "name": "blue", "color": [4, 111, 147] }],
                "objects": [
                    { "name": "flat", "shape": {
                        "type": "scale",
                        "factors": [1, 0, 1],
                        "child": { "type": "cube", "center": [0, 0, 0], "sideLength": 1, "material": "blue" }
                    } }
                ]
            }"#,
        );

        let error = description
            .build(&SceneOptions::default())
            .expect_err("zero factor");
        assert!(matches!(error, Error::InvalidScene(_)));
        assert!(error.to_string().contains("scale factors"));
    }
}
