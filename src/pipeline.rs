use std::time::Instant;

use tracing::{debug, info};

use crate::config;
use crate::error::Result;
use crate::matrix::PixelMatrix;

/// Runs every configured module over `image` in order.
///
/// The first failing module stops the run and its error is returned.
pub fn run_pixel_pipeline(
    image: PixelMatrix,
    pixel_pipeline: &config::PipelineConfig,
) -> Result<PixelMatrix> {
    let total = Instant::now();
    let mut pipeline_image = image;

    for module in &pixel_pipeline.pipeline_modules {
        let now = Instant::now();
        pipeline_image = module.process(pipeline_image)?;
        let (rows, cols) = pipeline_image.dimensions();
        debug!(
            module = %module.get_name(),
            rows,
            cols,
            channels = pipeline_image.channels(),
            elapsed = ?now.elapsed(),
            "module done"
        );
    }
    info!(
        modules = pixel_pipeline.pipeline_modules.len(),
        elapsed = ?total.elapsed(),
        "pixel pipeline done"
    );
    Ok(pipeline_image)
}
