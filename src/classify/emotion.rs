use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use log::debug;

use crate::classify::backend::InferenceBackend;
use crate::classify::{Prediction, predict, softmax};
use crate::error::{LayerError, Result};

/// Side length of the emotion model input
pub const EMOTION_INPUT_SIZE: u32 = 48;

/// Fraction of the frame's shorter side kept by the centered face crop
pub const FACE_CROP_RATIO: f64 = 0.6;

/// FER+ class order
pub const EMOTION_LABELS: [&str; 8] = [
    "Neutral",
    "Happiness",
    "Surprise",
    "Sadness",
    "Anger",
    "Disgust",
    "Fear",
    "Contempt",
];

/// Crop the center of a camera frame and scale it to the model input size
pub fn prepare_face(frame: &DynamicImage) -> Result<RgbaImage> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(LayerError::MissingInput);
    }

    let min_dimension = frame.width().min(frame.height());
    let crop_size = (min_dimension as f64 * FACE_CROP_RATIO) as u32;
    if crop_size == 0 {
        return Err(LayerError::InvalidInput(format!(
            "frame {}x{} is too small to crop a face from",
            frame.width(),
            frame.height()
        )));
    }

    let start_x = (frame.width() - crop_size) / 2;
    let start_y = (frame.height() - crop_size) / 2;
    let cropped = frame.crop_imm(start_x, start_y, crop_size, crop_size).to_rgba8();

    Ok(imageops::resize(
        &cropped,
        EMOTION_INPUT_SIZE,
        EMOTION_INPUT_SIZE,
        FilterType::Triangle,
    ))
}

/// Luminance of each pixel scaled to [0, 1]
pub fn face_tensor(face: &RgbaImage) -> Vec<f32> {
    face.pixels()
        .map(|p| {
            let gray = p[0] as f32 * 0.299 + p[1] as f32 * 0.587 + p[2] as f32 * 0.114;
            gray / 255.0
        })
        .collect()
}

/// Result of classifying one frame
#[derive(Debug, Clone)]
pub struct EmotionResult {
    pub prediction: Option<Prediction>,
    /// The 48x48 face the model saw; can be fed to the layer pipeline
    pub face: RgbaImage,
}

/// Facial emotion recognizer; the model outputs logits
pub struct EmotionClassifier<B: InferenceBackend> {
    backend: B,
}

impl<B: InferenceBackend> EmotionClassifier<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn classify(&self, frame: &DynamicImage) -> Result<EmotionResult> {
        let face = prepare_face(frame)?;
        let logits = self.backend.infer(&face_tensor(&face), EMOTION_INPUT_SIZE)?;
        let prediction = predict(&softmax(&logits), &EMOTION_LABELS)?;

        debug!("Emotion prediction: {:?}", prediction);

        Ok(EmotionResult { prediction, face })
    }
}
