use image::RgbaImage;

use crate::error::{LayerError, Result};
use crate::layers::{combine, convolution};
use crate::models::{HORIZONTAL_EDGE_KERNEL, Kernel, Layer, LayerKind, VERTICAL_EDGE_KERNEL};
use crate::pipeline::LayerStep;

fn source_layer(stack: &[Layer], index: usize) -> Result<&Layer> {
    stack.get(index).ok_or(LayerError::MissingLayer(index))
}

/// Convolve an earlier layer with a fixed 3x3 kernel
pub struct ConvolutionStep {
    pub kernel: Kernel,
    pub kind: LayerKind,
    /// Index of the layer to convolve
    pub source: usize,
}

impl ConvolutionStep {
    /// Vertical-edge features of the input layer
    pub fn vertical() -> Self {
        Self {
            kernel: VERTICAL_EDGE_KERNEL,
            kind: LayerKind::VerticalFeatures,
            source: 0,
        }
    }

    /// Horizontal-edge features of the input layer
    pub fn horizontal() -> Self {
        Self {
            kernel: HORIZONTAL_EDGE_KERNEL,
            kind: LayerKind::HorizontalFeatures,
            source: 0,
        }
    }
}

impl LayerStep for ConvolutionStep {
    fn process(&self, stack: &[Layer]) -> Result<RgbaImage> {
        let source = source_layer(stack, self.source)?;
        Ok(convolution::apply_convolution(&source.image, &self.kernel))
    }

    fn kind(&self) -> LayerKind {
        self.kind
    }
}

/// Merge two earlier layers with a pixelwise maximum
pub struct CombineStep {
    pub kind: LayerKind,
    pub left: usize,
    pub right: usize,
}

impl CombineStep {
    /// Output layer: max of the vertical and horizontal feature maps
    pub fn output() -> Self {
        Self {
            kind: LayerKind::Output,
            left: 1,
            right: 2,
        }
    }
}

impl LayerStep for CombineStep {
    fn process(&self, stack: &[Layer]) -> Result<RgbaImage> {
        let left = source_layer(stack, self.left)?;
        let right = source_layer(stack, self.right)?;
        combine::combine_max(&left.image, &right.image)
    }

    fn kind(&self) -> LayerKind {
        self.kind
    }
}
