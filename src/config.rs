use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{SceneDescription, SceneOptions};
use crate::error::{Error, Result};
use crate::math::Vec3;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrameConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    pub scene: SceneSource,
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_camera_position")]
    pub camera_position: [f32; 3],
    #[serde(default = "default_camera_rotation")]
    pub camera_rotation: [f32; 3],
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    #[serde(default = "default_enabled")]
    pub shading: bool,
    #[serde(default = "default_enabled")]
    pub tone_mapping: bool,
    #[serde(default)]
    pub mesh_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SceneSource {
    Preset(String),
    Inline(Box<SceneDescription>),
}

impl SceneSource {
    pub fn label(&self) -> &str {
        match self {
            Self::Preset(id) => id,
            Self::Inline(description) => &description.id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBatchConfig {
    pub frames: Vec<RenderFrameConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IncomingConfig {
    Single(RenderFrameConfig),
    Batch(RenderBatchConfig),
}

impl IncomingConfig {
    pub fn into_frames(self) -> Vec<RenderFrameConfig> {
        match self {
            Self::Single(frame) => vec![frame],
            Self::Batch(batch) => batch.frames,
        }
    }
}

const fn default_fov() -> f32 {
    1.0
}

const fn default_camera_position() -> [f32; 3] {
    [0.0, -1.5, -1.0]
}

const fn default_camera_rotation() -> [f32; 3] {
    [0.0, 0.0, 0.5]
}

const fn default_min_distance() -> f32 {
    0.001
}

const fn default_max_distance() -> f32 {
    25.0
}

const fn default_enabled() -> bool {
    true
}

impl RenderFrameConfig {
    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            shading: self.shading,
            mesh_path: self.mesh_path.as_ref().map(PathBuf::from),
        }
    }

    /// Key under which a built preset scene can be reused by later frames.
    ///
    /// Inline scenes return `None` and are rebuilt per frame.
    pub fn scene_cache_key(&self) -> Option<String> {
        let SceneSource::Preset(id) = &self.scene else {
            return None;
        };
        // Scenes bake in the marching thresholds, so those are part of the key.
        Some(format!(
            "{}|{}|{}|{}|{}",
            id.to_ascii_lowercase(),
            self.min_distance,
            self.max_distance,
            self.shading,
            self.mesh_path.as_deref().unwrap_or_default()
        ))
    }
}

pub fn validate_config(config: &RenderFrameConfig) -> Result<()> {
    validate_frame(config).map_err(Error::InvalidConfig)
}

fn validate_frame(config: &RenderFrameConfig) -> std::result::Result<(), String> {
    if config.width == 0 || config.height == 0 {
        return Err("width and height must be positive".to_string());
    }

    let output_parent = Path::new(&config.output_path)
        .parent()
        .ok_or("outputPath must include a parent directory")?;
    if !output_parent.as_os_str().is_empty() && !output_parent.exists() {
        return Err(format!(
            "output directory does not exist: {}",
            output_parent.display()
        ));
    }

    if let SceneSource::Preset(id) = &config.scene {
        if id.trim().is_empty() {
            return Err("scene must be a non-empty identifier".to_string());
        }
    }

    if !config.fov.is_finite() || config.fov <= 0.0 {
        return Err(format!("fov must be finite and > 0, got {}", config.fov));
    }

    if !is_finite_vec3(config.camera_position) || !is_finite_vec3(config.camera_rotation) {
        return Err("camera vectors must contain finite values".to_string());
    }

    if !config.min_distance.is_finite() || config.min_distance <= 0.0 {
        return Err(format!(
            "minDistance must be finite and > 0, got {}",
            config.min_distance
        ));
    }

    if !config.max_distance.is_finite() || config.max_distance <= config.min_distance {
        return Err(format!(
            "maxDistance ({}) must be finite and greater than minDistance ({})",
            config.max_distance, config.min_distance
        ));
    }

    if let Some(mesh_path) = &config.mesh_path {
        if mesh_path.trim().is_empty() {
            return Err("meshPath must not be empty when present".to_string());
        }
    }

    Ok(())
}

pub fn vec3_from(value: [f32; 3]) -> Vec3 {
    Vec3::from(value)
}

fn is_finite_vec3(value: [f32; 3]) -> bool {
    value[0].is_finite() && value[1].is_finite() && value[2].is_finite()
}
