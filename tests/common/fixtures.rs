use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Opaque gray pixel (R = G = B)
pub fn gray(value: u8) -> Rgba<u8> {
    Rgba([value, value, value, 255])
}

/// Raster where every pixel has the same gray intensity
pub fn uniform_raster(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, gray(value)))
}

/// Raster that is 0 left of `edge_column` and 255 from it onward
pub fn vertical_step_edge(width: u32, height: u32, edge_column: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, _| {
        if x < edge_column { gray(0) } else { gray(255) }
    }))
}

/// Black raster with one gray pixel at (x, y)
pub fn single_dot(width: u32, height: u32, x: u32, y: u32, value: u8) -> DynamicImage {
    let mut image = RgbaImage::from_pixel(width, height, gray(0));
    image.put_pixel(x, y, gray(value));
    DynamicImage::ImageRgba8(image)
}

/// Deterministic textured raster with edges in every direction
pub fn patterned_raster(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        gray(((x * 37 + y * 91 + x * y * 13) % 256) as u8)
    }))
}

/// Encode an image as PNG bytes, as a decoder collaborator would receive them
pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode test image");
    bytes.into_inner()
}

pub fn is_border(x: u32, y: u32, width: u32, height: u32) -> bool {
    x == 0 || y == 0 || x + 1 == width || y + 1 == height
}
