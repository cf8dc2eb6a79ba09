mod common;

use common::*;
use layerlens::pipeline::{MANIFEST_FILE, read_manifest};
use layerlens::{DisplayConfig, ScaleFilter, build_standard_pipeline};

#[test]
fn test_export_writes_layers_and_manifest() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("layers");

    let pipeline = build_standard_pipeline().with_export(out.clone(), Some(DisplayConfig::default()))?;
    let layers = pipeline.run(&vertical_step_edge(20, 10, 8))?;

    let manifest = read_manifest(&out)?;
    assert_eq!(manifest.len(), 4);

    let files: Vec<&str> = manifest.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(
        files,
        [
            "00_input_layer.png",
            "01_layer_1.png",
            "02_layer_2.png",
            "03_output_layer.png"
        ]
    );

    for (entry, layer) in manifest.iter().zip(&layers) {
        assert_eq!(entry.position, layer.position);
        assert_eq!(entry.name, layer.name());
        assert_eq!(entry.description, layer.description());
        assert_eq!((entry.width, entry.height), (300, 300));

        let saved = image::open(out.join(&entry.file))?;
        assert_eq!(saved.width(), 300);
        assert_eq!(saved.height(), 300);
    }

    assert!(out.join(MANIFEST_FILE).exists());
    Ok(())
}

#[test]
fn test_export_without_scaling_keeps_native_size() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    let pipeline = build_standard_pipeline().with_export(dir.path().to_path_buf(), None)?;
    let layers = pipeline.run(&patterned_raster(7, 5))?;

    let output = image::open(dir.path().join("03_output_layer.png"))?.to_rgba8();
    assert_eq!(output, layers[3].image);
    Ok(())
}

#[test]
fn test_export_uses_configured_display() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let display = DisplayConfig::default()
        .with_size(64)
        .with_filter(ScaleFilter::Linear);

    build_standard_pipeline()
        .with_export(dir.path().to_path_buf(), Some(display))?
        .run(&patterned_raster(16, 16))?;

    let manifest = read_manifest(dir.path())?;
    assert!(manifest.iter().all(|e| e.width == 64 && e.height == 64));
    Ok(())
}

#[test]
fn test_export_refuses_non_empty_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("existing.txt"), "keep me")?;

    let result = build_standard_pipeline().with_export(dir.path().to_path_buf(), None);
    assert!(matches!(result, Err(LayerError::ExportDirNotEmpty(_))));
    Ok(())
}

#[test]
fn test_failed_run_exports_nothing() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    let pipeline = build_standard_pipeline().with_export(dir.path().to_path_buf(), None)?;
    let result = pipeline.run(&image::DynamicImage::new_rgba8(0, 0));

    assert!(matches!(result, Err(LayerError::MissingInput)));
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}
