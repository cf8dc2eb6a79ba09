use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use log::debug;

use crate::classify::backend::InferenceBackend;
use crate::classify::{Prediction, predict};
use crate::display::{DisplayConfig, ScaleFilter, scale_for_display};
use crate::error::{LayerError, Result};
use crate::layers::convolution::gray_pixel;

/// Side length of the digit model input
pub const DIGIT_INPUT_SIZE: u32 = 28;

/// Side length the 28x28 preview is shown at
pub const DIGIT_PREVIEW_SIZE: u32 = 140;

pub const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Model-ready digit tensor plus a raster of what the model sees
#[derive(Debug, Clone)]
pub struct DigitInput {
    pub tensor: Vec<f32>,
    pub preview: RgbaImage,
}

/// Downscale a drawing to 28x28 and invert it so dark ink becomes high values
pub fn prepare_digit(drawing: &DynamicImage) -> Result<DigitInput> {
    if drawing.width() == 0 || drawing.height() == 0 {
        return Err(LayerError::MissingInput);
    }

    let small = imageops::resize(
        &drawing.to_rgba8(),
        DIGIT_INPUT_SIZE,
        DIGIT_INPUT_SIZE,
        FilterType::Triangle,
    );

    let mut tensor = Vec::with_capacity((DIGIT_INPUT_SIZE * DIGIT_INPUT_SIZE) as usize);
    let mut preview = RgbaImage::new(DIGIT_INPUT_SIZE, DIGIT_INPUT_SIZE);

    for (x, y, pixel) in small.enumerate_pixels() {
        let normalized = (255.0 - pixel[0] as f32) / 255.0;
        tensor.push(normalized);
        preview.put_pixel(x, y, gray_pixel((normalized * 255.0) as u8));
    }

    Ok(DigitInput { tensor, preview })
}

/// Result of classifying one drawing
#[derive(Debug, Clone)]
pub struct DigitResult {
    /// None when the model gave no positive probability
    pub prediction: Option<Prediction>,
    pub preview: RgbaImage,
}

impl DigitResult {
    /// Model input enlarged with hard pixel edges so each input cell stays visible
    pub fn display_preview(&self) -> RgbaImage {
        let display = DisplayConfig::default()
            .with_size(DIGIT_PREVIEW_SIZE)
            .with_filter(ScaleFilter::Nearest);
        scale_for_display(&self.preview, &display)
    }
}

/// Handwritten digit recognizer; the model outputs probabilities directly
pub struct DigitClassifier<B: InferenceBackend> {
    backend: B,
}

impl<B: InferenceBackend> DigitClassifier<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn classify(&self, drawing: &DynamicImage) -> Result<DigitResult> {
        let input = prepare_digit(drawing)?;
        let output = self.backend.infer(&input.tensor, DIGIT_INPUT_SIZE)?;
        let prediction = predict(&output, &DIGIT_LABELS)?;

        debug!("Digit prediction: {:?}", prediction);

        Ok(DigitResult {
            prediction,
            preview: input.preview,
        })
    }
}
