use image::RgbaImage;

/// 3x3 convolution weights, indexed `[row][column]`
pub type Kernel = [[f32; 3]; 3];

/// Responds to intensity changes along x (vertical edges)
pub const VERTICAL_EDGE_KERNEL: Kernel = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

/// Responds to intensity changes along y (horizontal edges)
pub const HORIZONTAL_EDGE_KERNEL: Kernel = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// The four stages of the visualization, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Input,
    VerticalFeatures,
    HorizontalFeatures,
    Output,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Input,
        LayerKind::VerticalFeatures,
        LayerKind::HorizontalFeatures,
        LayerKind::Output,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Input => "Input layer",
            LayerKind::VerticalFeatures => "Layer 1",
            LayerKind::HorizontalFeatures => "Layer 2",
            LayerKind::Output => "Output layer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LayerKind::Input => {
                "This is the raw data the model sees. Every pixel holds a number \
                 that corresponds to its brightness."
            }
            LayerKind::VerticalFeatures => {
                "Vertical feature detection. Neurons in this layer activate \
                 where they see vertical edges."
            }
            LayerKind::HorizontalFeatures => {
                "Horizontal feature detection. Neurons react to the top and \
                 bottom edges of the object."
            }
            LayerKind::Output => {
                "The model merges the simple features it found (lines) into more \
                 complex shapes, which lets it make a decision."
            }
        }
    }
}

/// One rendered stage of the visualization
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Index in the produced sequence
    pub position: usize,
    pub kind: LayerKind,
    pub image: RgbaImage,
}

impl Layer {
    pub fn new(position: usize, kind: LayerKind, image: RgbaImage) -> Self {
        Self {
            position,
            kind,
            image,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// File stem used when exporting (e.g. "01_layer_1")
    pub fn file_stem(&self) -> String {
        format!(
            "{:02}_{}",
            self.position,
            self.name().to_lowercase().replace(' ', "_")
        )
    }
}
