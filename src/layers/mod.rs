pub mod combine;
pub mod convolution;
pub mod steps;

use image::DynamicImage;
use std::sync::Arc;

use crate::error::{LayerError, Result};
use crate::models::Layer;
use crate::pipeline::Pipeline;
use steps::{CombineStep, ConvolutionStep};

/// Build the fixed Input -> Layer 1 -> Layer 2 -> Output pipeline
pub fn build_standard_pipeline() -> Pipeline {
    Pipeline::new()
        .add_step(Arc::new(ConvolutionStep::vertical()))
        .add_step(Arc::new(ConvolutionStep::horizontal()))
        .add_step(Arc::new(CombineStep::output()))
}

/// Produce the four visualization layers for one image
pub fn generate_layers(input: &DynamicImage) -> Result<Vec<Layer>> {
    build_standard_pipeline().run(input)
}

/// Decode PNG/JPEG/... bytes into an image ready for the pipeline
pub fn decode_raster(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(LayerError::MissingInput);
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Decode `bytes` and produce its layers in one call
pub fn generate_layers_from_bytes(bytes: &[u8]) -> Result<Vec<Layer>> {
    let input = decode_raster(bytes)?;
    generate_layers(&input)
}
