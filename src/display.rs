use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Side length layers are scaled to for display
pub const DEFAULT_DISPLAY_SIZE: u32 = 300;

/// Resampling used when scaling a layer for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleFilter {
    /// Hard pixel edges, keeps single-pixel feature lines crisp
    #[default]
    Nearest,
    Linear,
}

impl ScaleFilter {
    fn filter_type(self) -> FilterType {
        match self {
            ScaleFilter::Nearest => FilterType::Nearest,
            ScaleFilter::Linear => FilterType::Triangle,
        }
    }
}

/// How a layer is presented on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub size: u32,
    pub filter: ScaleFilter,
}

impl DisplayConfig {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_filter(mut self, filter: ScaleFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_DISPLAY_SIZE,
            filter: ScaleFilter::default(),
        }
    }
}

/// Scale a layer raster to the square display size
pub fn scale_for_display(image: &RgbaImage, config: &DisplayConfig) -> RgbaImage {
    imageops::resize(image, config.size, config.size, config.filter.filter_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn nearest_scaling_keeps_pixel_values() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let scaled = scale_for_display(&image, &DisplayConfig::default().with_size(10));

        assert_eq!(scaled.dimensions(), (10, 10));
        assert_eq!(scaled.get_pixel(0, 5)[0], 0);
        assert_eq!(scaled.get_pixel(9, 5)[0], 255);
        assert!(scaled.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}
