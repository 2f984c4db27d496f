use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

use clap::Parser;
use log::info;

use sdfmarch::cli::Args;
use sdfmarch::config::{validate_config, IncomingConfig, RenderFrameConfig, SceneSource};
use sdfmarch::domain::presets::build_scene;
use sdfmarch::domain::Scene;
use sdfmarch::logger::init_logger;
use sdfmarch::render::{render, RenderSettings, View};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.debug_level.clone().into());

    let raw = match &args.config {
        Some(path) => fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config '{}': {error}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let incoming: IncomingConfig = serde_json::from_str(&raw)?;
    let mut frames = incoming.into_frames();
    if frames.is_empty() {
        return Err("frames array must not be empty".into());
    }
    if let Some(output) = &args.output {
        if frames.len() > 1 {
            return Err("--output can only be used with a single-frame config".into());
        }
        frames[0].output_path = output.clone();
    }

    let total = frames.len();
    let mut prepared_frames = Vec::with_capacity(total);
    for frame in &frames {
        validate_config(frame)?;
        let mut settings = RenderSettings::from_frame(frame);
        settings.show_progress = !args.no_progress;
        prepared_frames.push((settings, View::from_frame(frame), frame));
    }

    let mut scene_cache: HashMap<String, Scene> = HashMap::new();
    for (index, (settings, view, frame)) in prepared_frames.iter().enumerate() {
        let built;
        let scene: &Scene = match frame.scene_cache_key() {
            Some(cache_key) => match scene_cache.entry(cache_key) {
                Entry::Occupied(cached) => cached.into_mut(),
                Entry::Vacant(slot) => slot.insert(build_frame_scene(frame)?),
            },
            None => {
                built = build_frame_scene(frame)?;
                &built
            }
        };

        let (image, stats) = render(scene, settings, view);
        image.save(&settings.output_path)?;

        info!(
            "{} hits, {} misses for scene '{}'",
            stats.hits,
            stats.misses,
            scene.id()
        );
        println!(
            "[{}/{}] Rendered scene '{}' in {} ms: {}",
            index + 1,
            total,
            scene.id(),
            stats.elapsed.as_millis(),
            settings.output_path
        );
    }

    Ok(())
}

fn build_frame_scene(frame: &RenderFrameConfig) -> Result<Scene, String> {
    let options = frame.scene_options();
    let scene = match &frame.scene {
        SceneSource::Preset(id) => build_scene(id, &options),
        SceneSource::Inline(description) => description.build(&options),
    };
    scene.map_err(|error| format!("Failed to build scene '{}': {error}", frame.scene.label()))
}
