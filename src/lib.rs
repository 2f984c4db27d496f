pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
pub mod march;
pub mod math;
pub mod ray;
pub mod render;
pub mod sdf;
pub mod shading;
pub mod tone;

pub use error::{Error, Result};
