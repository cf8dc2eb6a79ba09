use log::debug;
use rten::Model;
use rten_tensor::Tensor;
use rten_tensor::prelude::*;
use std::path::Path;

use crate::error::{LayerError, Result};

/// An opaque pre-trained model taking one square grayscale image
pub trait InferenceBackend {
    /// Run the model on a `[1, side, side, 1]` float input and return its flat output
    fn infer(&self, input: &[f32], side: u32) -> Result<Vec<f32>>;
}

/// Inference through an `.rten` model file
pub struct RtenBackend {
    model: Model,
}

impl RtenBackend {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LayerError::ModelLoad(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let model = Model::load_file(path).map_err(|e| LayerError::ModelLoad(e.to_string()))?;
        debug!("Loaded model {}", path.display());

        Ok(Self { model })
    }
}

impl InferenceBackend for RtenBackend {
    fn infer(&self, input: &[f32], side: u32) -> Result<Vec<f32>> {
        let side = side as usize;
        if input.len() != side * side {
            return Err(LayerError::InvalidInput(format!(
                "expected {} input values, got {}",
                side * side,
                input.len()
            )));
        }

        // NHWC, single grayscale channel
        let tensor: Tensor<f32> = Tensor::from_data(&[1, side, side, 1], input.to_vec());
        let output = self
            .model
            .run_one(tensor.view().into(), None)
            .map_err(|e| LayerError::Inference(e.to_string()))?;
        let output: Tensor<f32> = output
            .try_into()
            .map_err(|e| LayerError::Inference(format!("unexpected output type: {e}")))?;

        Ok(output.iter().copied().collect())
    }
}
