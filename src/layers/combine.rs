use image::RgbaImage;
use imageproc::map::map_colors2;

use crate::error::{LayerError, Result};
use crate::layers::convolution::{gray_pixel, intensity};

/// Pixelwise maximum of two feature maps, over the full frame (borders included)
pub fn combine_max(left: &RgbaImage, right: &RgbaImage) -> Result<RgbaImage> {
    if left.dimensions() != right.dimensions() {
        return Err(LayerError::DimensionMismatch {
            left: left.dimensions(),
            right: right.dimensions(),
        });
    }

    Ok(map_colors2(left, right, |a, b| {
        gray_pixel(intensity(&a).max(intensity(&b)))
    }))
}
