use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building, exporting or classifying layers
#[derive(Debug, Error)]
pub enum LayerError {
    #[error("raster dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("no input raster was supplied")]
    MissingInput,

    #[error("layer {0} has not been produced yet")]
    MissingLayer(usize),

    #[error("export directory is not empty: {}", .0.display())]
    ExportDirNotEmpty(PathBuf),

    #[error("model loading failed: {0}")]
    ModelLoad(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayerError>;
