use std::time::{Duration, Instant};

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::domain::Scene;
use crate::march::{march, MarchOutcome};
use crate::math::Vec3;
use crate::shading::shade;
use crate::tone::{extended_reinhard, to_rgb};

use super::{RenderSettings, View};

const BACKGROUND: Vec3 = Vec3::ZERO;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    pub hits: u64,
    pub misses: u64,
    /// Primary rays whose velocity was zero; these never advance.
    pub degenerate: u64,
    pub elapsed: Duration,
}

pub fn render(scene: &Scene, settings: &RenderSettings, view: &View) -> (RgbImage, RenderStats) {
    let started = Instant::now();
    let width = settings.width as usize;
    let height = settings.height as usize;
    let mut color_buffer = vec![BACKGROUND; width * height];

    info!(
        "Rendering scene '{}' at {}x{} ({} objects, {} lights)",
        scene.id(),
        settings.width,
        settings.height,
        scene.objects().len(),
        scene.lights().len()
    );

    let progress = progress_bar(settings);

    // Pixels are independent, so rows are split across the thread pool.
    let (hits, degenerate) = color_buffer
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut row_hits: u64 = 0;
            let mut row_degenerate: u64 = 0;
            for (x, color_slot) in row.iter_mut().enumerate() {
                let ray = view.primary_ray(x as u32, y as u32, settings.width, settings.height);
                if ray.is_degenerate() {
                    row_degenerate += 1;
                }
                *color_slot = match march(scene, ray) {
                    MarchOutcome::Hit(hit) => {
                        row_hits += 1;
                        let color = shade(scene, &hit);
                        if settings.tone_mapping {
                            extended_reinhard(color)
                        } else {
                            color
                        }
                    }
                    MarchOutcome::Miss => BACKGROUND,
                };
            }
            progress.inc(row.len() as u64);
            (row_hits, row_degenerate)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    progress.finish_and_clear();

    let mut image = RgbImage::new(settings.width, settings.height);
    for (index, color) in color_buffer.iter().enumerate() {
        let x = (index % width) as u32;
        let y = (index / width) as u32;
        image.put_pixel(x, y, to_rgb(*color));
    }

    let stats = RenderStats {
        hits,
        misses: settings.pixel_count() - hits,
        degenerate,
        elapsed: started.elapsed(),
    };
    if degenerate > 0 {
        warn!("{degenerate} primary rays had zero velocity and were reported as misses");
    }
    debug!("Render stats: {stats:?}");
    (image, stats)
}

fn progress_bar(settings: &RenderSettings) -> ProgressBar {
    if !settings.show_progress {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(settings.pixel_count());
    let style = ProgressStyle::with_template("{bar:40} {pos}/{len} pixels ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{presets, SceneOptions};
    use image::Rgb;

    fn settings(width: u32, height: u32, tone_mapping: bool) -> RenderSettings {
        RenderSettings {
            width,
            height,
            output_path: String::new(),
            tone_mapping,
            show_progress: false,
        }
    }

    fn looking_down_z() -> View {
        View {
            position: Vec3::new(0.0, -3.0, -1.0),
            rotation: Vec3::ZERO,
            fov: 1.0,
        }
    }

    #[test]
    fn unshaded_sphere_renders_material_color_at_center() {
        let options = SceneOptions {
            shading: false,
            ..SceneOptions::default()
        };
        let scene = presets::build_scene("orange_sphere", &options).expect("preset builds");
        let (image, stats) = render(&scene, &settings(32, 18, false), &looking_down_z());

        assert_eq!(image.dimensions(), (32, 18));
        assert_eq!(*image.get_pixel(16, 9), Rgb([177, 103, 57]));
        assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(stats.hits + stats.misses, 32 * 18);
        assert!(stats.hits > 0 && stats.misses > 0);
    }

    #[test]
    fn tone_mapping_darkens_midtones() {
        let options = SceneOptions {
            shading: false,
            ..SceneOptions::default()
        };
        let scene = presets::build_scene("orange_sphere", &options).expect("preset builds");
        let (image, _) = render(&scene, &settings(32, 18, true), &looking_down_z());

        let Rgb([r, g, b]) = *image.get_pixel(16, 9);
        assert!(r < 177 && g < 103 && b < 57);
        assert!(r > g && g > b);
    }

    #[test]
    fn shaded_preset_renders_every_pixel() {
        let scene =
            presets::build_scene("sphere_on_plane", &SceneOptions::default()).expect("preset builds");
        let view = View {
            position: Vec3::new(0.0, -1.5, -1.0),
            rotation: Vec3::new(0.0, 0.0, 0.5),
            fov: 1.0,
        };
        let (image, stats) = render(&scene, &settings(16, 9, true), &view);
        assert_eq!(image.dimensions(), (16, 9));
        assert_eq!(stats.hits + stats.misses, 16 * 9);
        assert!(stats.hits > 0);
    }

    #[test]
    fn zero_velocity_pixels_are_counted_and_missed() {
        let options = SceneOptions {
            shading: false,
            ..SceneOptions::default()
        };
        let scene = presets::build_scene("orange_sphere", &options).expect("preset builds");
        // Pixel (1, 1) of a 2x2 image maps to (0, 1, 0) before rotation.
        let view = View {
            position: Vec3::new(0.0, -3.0, -1.0),
            rotation: Vec3::new(0.0, -1.0, 0.0),
            fov: 1.0,
        };
        let (image, stats) = render(&scene, &settings(2, 2, false), &view);

        assert_eq!(stats.degenerate, 1);
        assert_eq!(stats.hits + stats.misses, 4);
        assert_eq!(*image.get_pixel(1, 1), Rgb([0, 0, 0]));
    }
}
