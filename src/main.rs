use clap::{Parser, Subcommand};
use image::{DynamicImage, ImageReader};
use log::info;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Instant;

use layerlens::classify::backend::RtenBackend;
use layerlens::classify::digit::DigitClassifier;
use layerlens::classify::emotion::EmotionClassifier;
use layerlens::{DisplayConfig, Layer, LayerBrowser, Navigation, ScaleFilter, build_standard_pipeline};

#[derive(Parser)]
#[command(name = "layerlens")]
#[command(about = "Visualize convolution layers and run small image classifiers")]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the four layers for an image and optionally export them
    Explain {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Export layers as PNG plus manifest to directory (must be empty)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Side length exported layers are scaled to
        #[arg(long, default_value_t = layerlens::display::DEFAULT_DISPLAY_SIZE,
              value_parser = clap::value_parser!(u32).range(1..))]
        display_size: u32,

        /// Use linear instead of nearest-neighbour scaling
        #[arg(long)]
        linear: bool,
    },

    /// Step through the layers interactively (n = next, p = previous, q = quit)
    Browse {
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,
    },

    /// Recognize a handwritten digit (dark ink on a light background)
    Digit {
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Path to the .rten digit model
        #[arg(long, value_name = "MODEL")]
        model: PathBuf,

        /// Save the 28x28 model input, enlarged to 140x140, to this PNG
        #[arg(long, value_name = "PNG")]
        preview: Option<PathBuf>,
    },

    /// Recognize the facial emotion in the center of a frame
    Emotion {
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Path to the .rten emotion model
        #[arg(long, value_name = "MODEL")]
        model: PathBuf,

        /// Also export the layers of the cropped face to directory
        #[arg(long, value_name = "DIR")]
        explain_out: Option<PathBuf>,
    },
}

fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    info!("Loading image: {:?}", path);
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
    info!("Image loaded: {}x{}", img.width(), img.height());
    Ok(img)
}

fn print_layer(layer: &Layer, total: usize) {
    println!(
        "[{} / {}] {} ({}x{})",
        layer.position + 1,
        total,
        layer.name(),
        layer.image.width(),
        layer.image.height()
    );
    println!("    {}", layer.description());
}

fn explain(
    input: &DynamicImage,
    out: Option<PathBuf>,
    display: DisplayConfig,
) -> anyhow::Result<Vec<Layer>> {
    let mut pipeline = build_standard_pipeline();
    if let Some(dir) = out {
        pipeline = pipeline.with_export(dir, Some(display))?;
    }

    let layers = pipeline.run(input)?;
    for layer in &layers {
        print_layer(layer, layers.len());
    }
    Ok(layers)
}

fn browse(layers: Vec<Layer>) -> anyhow::Result<()> {
    let mut browser = LayerBrowser::new(layers);
    let total = browser.layers().len();

    if let Some(layer) = browser.current() {
        print_layer(layer, total);
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let navigation = match line?.trim() {
            "n" | "next" => browser.next(Instant::now()),
            "p" | "prev" => browser.previous(Instant::now()),
            "q" | "quit" => break,
            other => {
                println!("Unknown command '{}' (n, p, q)", other);
                continue;
            }
        };

        match navigation {
            Navigation::Moved(_) => {
                if let Some(layer) = browser.current() {
                    print_layer(layer, total);
                }
            }
            Navigation::Boundary(Some(notice)) => println!("{}", notice),
            Navigation::Boundary(None) => {}
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match args.command {
        Command::Explain {
            image_path,
            out,
            display_size,
            linear,
        } => {
            let filter = if linear {
                ScaleFilter::Linear
            } else {
                ScaleFilter::Nearest
            };
            let display = DisplayConfig::default()
                .with_size(display_size)
                .with_filter(filter);

            let img = load_image(&image_path)?;
            explain(&img, out, display)?;
        }
        Command::Browse { image_path } => {
            let img = load_image(&image_path)?;
            let layers = build_standard_pipeline().run(&img)?;
            browse(layers)?;
        }
        Command::Digit {
            image_path,
            model,
            preview,
        } => {
            let img = load_image(&image_path)?;
            let classifier = DigitClassifier::new(RtenBackend::load(&model)?);
            let result = classifier.classify(&img)?;

            match &result.prediction {
                Some(prediction) => println!("Digit: {}", prediction),
                None => println!("No digit recognized"),
            }

            if let Some(path) = preview {
                result.display_preview().save(&path)?;
                info!("Saved model input preview to {:?}", path);
            }
        }
        Command::Emotion {
            image_path,
            model,
            explain_out,
        } => {
            let img = load_image(&image_path)?;
            let classifier = EmotionClassifier::new(RtenBackend::load(&model)?);
            let result = classifier.classify(&img)?;

            match &result.prediction {
                Some(prediction) => println!("Emotion: {}", prediction),
                None => println!("Not recognized"),
            }

            if let Some(dir) = explain_out {
                let face = DynamicImage::ImageRgba8(result.face);
                explain(&face, Some(dir), DisplayConfig::default())?;
            }
        }
    }

    Ok(())
}
