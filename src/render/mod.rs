pub mod renderer;
pub mod settings;
pub mod view;

pub use renderer::{render, RenderStats};
pub use settings::RenderSettings;
pub use view::View;
