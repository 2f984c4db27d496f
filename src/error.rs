use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("invalid plane axis '{0}', expected \"X\", \"Y\" or \"Z\"")]
    InvalidPlaneAxis(String),

    #[error("unknown scene identifier: {0}")]
    UnknownScene(String),

    #[error("failed to load mesh '{path}': {source}")]
    MeshLoad {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("mesh '{0}' contains no triangles")]
    EmptyMesh(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
