use crate::error::{Error, Result};
use crate::math::Vec3;
use crate::sdf::{Primitive, Sdf};

use super::Scene;

pub fn validate_scene(scene: &Scene) -> Result<()> {
    validate_scene_parts(scene).map_err(Error::InvalidScene)
}

fn validate_scene_parts(scene: &Scene) -> std::result::Result<(), String> {
    if scene.objects().is_empty() {
        return Err(format!("scene '{}' must contain at least one object", scene.id()));
    }

    let min_distance = scene.min_distance();
    let max_distance = scene.max_distance();
    if !min_distance.is_finite() || min_distance <= 0.0 {
        return Err(format!("min distance must be finite and > 0, got {min_distance}"));
    }
    if !max_distance.is_finite() || max_distance <= min_distance {
        return Err(format!(
            "max distance ({max_distance}) must be finite and greater than min distance ({min_distance})"
        ));
    }

    for material in scene.materials() {
        if !material.color.is_finite() {
            return Err(format!("material '{}' has a non-finite color", material.name));
        }
    }

    for object in scene.objects() {
        let mut missing = None;
        object.shape.for_each_material(&mut |id| {
            if id.0 >= scene.materials().len() && missing.is_none() {
                missing = Some(id.0);
            }
        });
        if let Some(id) = missing {
            return Err(format!(
                "object '{}' references missing material id {id}",
                object.name
            ));
        }

        let mut invalid = Ok(());
        object.shape.for_each_node(&mut |node| {
            if invalid.is_ok() {
                invalid = validate_node(&object.name, node);
            }
        });
        invalid?;
    }

    for light in scene.lights() {
        light
            .validate_physical()
            .map_err(|error| format!("light '{}' is invalid: {error}", light.name))?;
    }

    Ok(())
}

fn validate_node(object_name: &str, node: &Sdf) -> std::result::Result<(), String> {
    match node {
        Sdf::Primitive { shape, .. } => validate_primitive(object_name, shape),
        Sdf::Binary { .. } => Ok(()),
        Sdf::Scale { factors, .. } => {
            validate_positive_finite_vec3(object_name, "scale factors", *factors)
        }
    }
}

fn validate_primitive(object_name: &str, shape: &Primitive) -> std::result::Result<(), String> {
    validate_finite_vec3(object_name, "position", shape.position())?;
    match shape {
        Primitive::Sphere { radius, .. } => {
            validate_positive_finite_scalar(object_name, "sphere radius", *radius)
        }
        Primitive::Torus {
            major_radius,
            minor_radius,
            ..
        } => {
            validate_positive_finite_scalar(object_name, "torus major radius", *major_radius)?;
            validate_positive_finite_scalar(object_name, "torus minor radius", *minor_radius)
        }
        Primitive::Cylinder { height, radius, .. } => {
            validate_positive_finite_scalar(object_name, "cylinder height", *height)?;
            validate_positive_finite_scalar(object_name, "cylinder radius", *radius)
        }
        Primitive::Cube { half_extent, .. } => {
            validate_positive_finite_scalar(object_name, "cube side length", *half_extent)
        }
        Primitive::Box { half_extents, .. } => {
            validate_positive_finite_vec3(object_name, "box side lengths", *half_extents)
        }
        Primitive::RoundBox {
            half_extents,
            radius,
            ..
        } => {
            validate_positive_finite_vec3(object_name, "round box side lengths", *half_extents)?;
            validate_non_negative_finite_scalar(object_name, "round box radius", *radius)
        }
        Primitive::Plane { offset, .. } => {
            if !offset.is_finite() {
                return Err(format!(
                    "object '{object_name}' has non-finite plane offset ({offset})"
                ));
            }
            Ok(())
        }
        Primitive::Mesh(mesh) => {
            if mesh.triangle_count() == 0 {
                return Err(format!("object '{object_name}' has an empty mesh"));
            }
            Ok(())
        }
    }
}

fn validate_positive_finite_scalar(
    object_name: &str,
    field: &str,
    value: f32,
) -> std::result::Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!(
            "object '{object_name}' has non-positive or non-finite {field} ({value})"
        ));
    }
    Ok(())
}

fn validate_non_negative_finite_scalar(
    object_name: &str,
    field: &str,
    value: f32,
) -> std::result::Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "object '{object_name}' has negative or non-finite {field} ({value})"
        ));
    }
    Ok(())
}

fn validate_finite_vec3(
    object_name: &str,
    field: &str,
    value: Vec3,
) -> std::result::Result<(), String> {
    if !value.is_finite() {
        return Err(format!(
            "object '{object_name}' has non-finite {field} ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

fn validate_positive_finite_vec3(
    object_name: &str,
    field: &str,
    value: Vec3,
) -> std::result::Result<(), String> {
    if !(value.is_finite() && value.x > 0.0 && value.y > 0.0 && value.z > 0.0) {
        return Err(format!(
            "object '{object_name}' has non-positive or non-finite {field} ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}
