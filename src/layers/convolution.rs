use image::{Rgba, RgbaImage};
use crate::models::Kernel;

/// Intensity of a pixel: its red channel. Inputs are treated as already grayscale.
#[inline]
pub fn intensity(pixel: &Rgba<u8>) -> u8 {
    pixel[0]
}

/// Opaque gray pixel with R = G = B = `value`
#[inline]
pub fn gray_pixel(value: u8) -> Rgba<u8> {
    Rgba([value, value, value, 255])
}

/// Convolve the interior of `src` with a 3x3 kernel.
///
/// The output starts zero-filled and only interior pixels are written, so the
/// 1-pixel border stays at 0. Rasters narrower or shorter than 3 pixels come
/// back entirely zero.
pub fn apply_convolution(src: &RgbaImage, kernel: &Kernel) -> RgbaImage {
    let (width, height) = src.dimensions();
    let mut output = RgbaImage::new(width, height);

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut sum = 0.0f32;
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, weight) in row.iter().enumerate() {
                    // ky/kx are 0..3, so this addresses (x-1..=x+1, y-1..=y+1)
                    let pixel = src.get_pixel(x + kx as u32 - 1, y + ky as u32 - 1);
                    sum += intensity(pixel) as f32 * weight;
                }
            }

            let value = sum.abs().round().min(255.0) as u8;
            output.put_pixel(x, y, gray_pixel(value));
        }
    }

    output
}
