use crate::config::RenderFrameConfig;

#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    pub tone_mapping: bool,
    pub show_progress: bool,
}

impl RenderSettings {
    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            output_path: frame.output_path.clone(),
            tone_mapping: frame.tone_mapping,
            show_progress: true,
        }
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
