use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context};
use clap::Parser as Clap_parser;
use image::ImageFormat;
use pixmat::{config, io, pipeline::run_pixel_pipeline, PixelMatrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clap_parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// image to transform
    #[arg(value_name = "input_path")]
    input_path: PathBuf,

    #[arg(short, default_value = "result.png", value_name = "output_path")]
    output_path: PathBuf,

    /// pipeline config; without one the image is re-encoded unchanged
    #[arg(short, value_name = "config_path")]
    config_path: Option<PathBuf>,

    /// output format, inferred from the output extension when omitted
    #[arg(short, long)]
    format: Option<String>,

    /// log dimensions and mean channel intensities of input and output
    #[arg(long)]
    stats: bool,
}

fn log_stats(label: &str, image: &PixelMatrix) {
    let (rows, cols) = image.dimensions();
    match image.mean_intensities() {
        Ok((r, g, b)) => info!(label, rows, cols, mean_r = r, mean_g = g, mean_b = b, "stats"),
        Err(_) => info!(label, rows, cols, channels = image.channels(), "stats"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let format = match &args.format {
        Some(ext) => ImageFormat::from_extension(ext).ok_or_else(|| anyhow!("unknown image format {ext:?}"))?,
        None => io::format_from_path(&args.output_path)?,
    };

    let config = match &args.config_path {
        Some(path) => config::load_config(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::PipelineConfig { pipeline_modules: vec![] },
    };

    let decode = Instant::now();
    let image = io::read_image(&args.input_path)
        .with_context(|| format!("reading {}", args.input_path.display()))?;
    info!(elapsed = ?decode.elapsed(), "decode file");
    if args.stats {
        log_stats("input", &image);
    }

    let result = run_pixel_pipeline(image, &config)?;
    if args.stats {
        log_stats("output", &result);
    }

    let now = Instant::now();
    io::write_image(&args.output_path, &result, format)
        .with_context(|| format!("writing {}", args.output_path.display()))?;
    info!(elapsed = ?now.elapsed(), path = %args.output_path.display(), "save");
    info!(elapsed = ?decode.elapsed(), "total time");
    Ok(())
}
