pub mod browser;
pub mod classify;
pub mod display;
pub mod error;
pub mod layers;
pub mod models;
pub mod pipeline;

pub use browser::{LayerBrowser, Navigation, NoticeThrottle};
pub use display::{DisplayConfig, ScaleFilter, scale_for_display};
pub use error::{LayerError, Result};
pub use layers::{build_standard_pipeline, decode_raster, generate_layers, generate_layers_from_bytes};
pub use models::{HORIZONTAL_EDGE_KERNEL, Kernel, Layer, LayerKind, VERTICAL_EDGE_KERNEL};
pub use pipeline::{ExportConfig, LayerStep, ManifestEntry, Pipeline, PipelineContext};
