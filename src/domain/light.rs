use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Point {
        position: Vec3,
        intensity: f32,
        /// 0-255 per channel.
        color: Vec3,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
}

impl Light {
    pub fn point(name: impl Into<String>, position: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: LightKind::Point {
                position,
                intensity,
                color,
            },
        }
    }

    pub fn position(&self) -> Vec3 {
        match self.kind {
            LightKind::Point { position, .. } => position,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self.kind {
            LightKind::Point { intensity, .. } => intensity,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self.kind {
            LightKind::Point { color, .. } => color,
        }
    }

    pub fn light_vector(&self, p: Vec3) -> Vec3 {
        (self.position() - p).normalize()
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        match self.kind {
            LightKind::Point {
                position,
                intensity,
                color,
            } => {
                validate_vec3_finite(position, "position")?;
                validate_vec3_finite(color, "color")?;
                validate_vec3_non_negative(color, "color")?;
                if !intensity.is_finite() || intensity <= 0.0 {
                    return Err(format!("intensity must be finite and > 0, got {intensity}"));
                }
            }
        }
        Ok(())
    }
}

fn validate_vec3_finite(value: Vec3, field: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!(
            "{field} components must be finite, got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}

fn validate_vec3_non_negative(value: Vec3, field: &str) -> Result<(), String> {
    if value.x < 0.0 || value.y < 0.0 || value.z < 0.0 {
        return Err(format!(
            "{field} components must be >= 0, got ({}, {}, {})",
            value.x, value.y, value.z
        ));
    }
    Ok(())
}
