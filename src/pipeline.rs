use image::{DynamicImage, RgbaImage};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::display::{scale_for_display, DisplayConfig};
use crate::error::{LayerError, Result};
use crate::models::{Layer, LayerKind};

/// Name of the manifest written next to exported layer images
pub const MANIFEST_FILE: &str = "layers.json";

/// Export configuration for finished layer sequences
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Directory the PNGs and manifest are written to
    pub output_dir: PathBuf,
    /// Scale layers before saving (None keeps the native size)
    pub display: Option<DisplayConfig>,
}

/// Run-level settings applied once every step has finished
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub export: Option<ExportConfig>,
}

/// Trait that all layer steps must implement
pub trait LayerStep: Send + Sync {
    /// Produce the next raster from the layers built so far.
    /// `stack[0]` is always the input layer.
    fn process(&self, stack: &[Layer]) -> Result<RgbaImage>;

    /// Which stage of the visualization this step produces
    fn kind(&self) -> LayerKind;

    /// Human-readable name for this step (used in log output)
    fn name(&self) -> &str {
        self.kind().name()
    }
}

/// One line of the export manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub position: usize,
    pub name: String,
    pub description: String,
    pub file: String,
    pub width: u32,
    pub height: u32,
}

/// Composable layer pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn LayerStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable export of the finished layers.
    /// The directory must be empty or non-existent.
    pub fn with_export(mut self, output_dir: PathBuf, display: Option<DisplayConfig>) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(LayerError::ExportDirNotEmpty(output_dir));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.export = Some(ExportConfig {
            output_dir,
            display,
        });

        Ok(self)
    }

    /// Add a step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn LayerStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Number of layers a full run produces (input included)
    pub fn layer_count(&self) -> usize {
        self.steps.len() + 1
    }

    /// Run every step on `input` and return the whole layer sequence.
    ///
    /// Nothing is returned or exported unless all steps succeed.
    pub fn run(&self, input: &DynamicImage) -> Result<Vec<Layer>> {
        let layers = self.build_layers(input, self.steps.len())?;

        if let Some(export) = &self.context.export {
            export_layers(&layers, export)?;
        }

        Ok(layers)
    }

    /// Run only the first `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: &DynamicImage, num_steps: usize) -> Result<Vec<Layer>> {
        self.build_layers(input, num_steps)
    }

    fn build_layers(&self, input: &DynamicImage, num_steps: usize) -> Result<Vec<Layer>> {
        if input.width() == 0 || input.height() == 0 {
            return Err(LayerError::MissingInput);
        }

        let mut layers = Vec::with_capacity(num_steps.min(self.steps.len()) + 1);
        layers.push(Layer::new(0, LayerKind::Input, input.to_rgba8()));

        for step in self.steps.iter().take(num_steps) {
            debug!("Running step: {} ({} layers so far)", step.name(), layers.len());

            let image = step.process(&layers)?;
            layers.push(Layer::new(layers.len(), step.kind(), image));
        }

        Ok(layers)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Write each layer as a PNG plus a JSON manifest describing them
pub fn export_layers(layers: &[Layer], config: &ExportConfig) -> Result<Vec<ManifestEntry>> {
    let mut manifest = Vec::with_capacity(layers.len());

    for layer in layers {
        let image = match &config.display {
            Some(display) => scale_for_display(&layer.image, display),
            None => layer.image.clone(),
        };

        let filename = format!("{}.png", layer.file_stem());
        image.save(config.output_dir.join(&filename))?;
        debug!("Saved {}", filename);

        manifest.push(ManifestEntry {
            position: layer.position,
            name: layer.name().to_string(),
            description: layer.description().to_string(),
            file: filename,
            width: image.width(),
            height: image.height(),
        });
    }

    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(config.output_dir.join(MANIFEST_FILE), json)?;

    info!(
        "Exported {} layers to {}",
        manifest.len(),
        config.output_dir.display()
    );

    Ok(manifest)
}

/// Read back a manifest written by [`export_layers`]
pub fn read_manifest(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let json = std::fs::read_to_string(dir.join(MANIFEST_FILE))?;
    Ok(serde_json::from_str(&json)?)
}
