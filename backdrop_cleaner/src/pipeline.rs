// THEORY:
// The `pipeline` module is the top-level API for both cleanup tools. It wires the
// codec boundary (decode, encode, atomic save) around the pure pixel operations so
// that a caller only has to name an input file, an output file and a config.
//
// Each operation is one straight pass: decode → process → encode → replace. The
// decoded grid is owned by the call and dropped when it returns. Nothing is cached
// between calls.

use crate::core_modules::alpha_flatten::flatten_with_stats;
use crate::core_modules::flood_fill::flood_fill;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use image::ImageFormat;
use std::path::Path;

// Re-export key data structures for the public API.
pub use crate::core_modules::alpha_flatten::FlattenStats;
pub use crate::core_modules::flood_fill::flood_fill::FillReport;
pub use crate::core_modules::pixel::pixel::Pixel;

/// The dark stone background the cleaned images are composited against.
pub const DEFAULT_BACKGROUND: Pixel = Pixel::new(15, 15, 20);

/// Configuration shared by both cleanup operations.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// The color written over removed checkerboard pixels and behind transparency.
    pub background: Pixel,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
        }
    }
}

/// Outcome of a checkerboard removal run.
#[derive(Debug, Clone)]
pub struct CheckerboardReport {
    pub width: u32,
    pub height: u32,
    pub fill: FillReport,
}

/// Outcome of a transparency removal run.
#[derive(Debug, Clone)]
pub struct TransparencyReport {
    pub width: u32,
    pub height: u32,
    pub stats: FlattenStats,
}

/// Removes the checkerboard reachable from the corners of `input` and writes the
/// result to `output`. `output` may equal `input`.
///
/// The output format follows the extension of `output`.
pub fn remove_checkerboard_file(
    input: &Path,
    output: &Path,
    config: &CleanupConfig,
) -> Result<CheckerboardReport> {
    // Fail on an unusable output name before doing any work.
    let format = image_helper::output_format(output)?;

    log::info!("Processing {}...", input.display());
    let mut grid = image_helper::load_rgb(input)?;

    let fill = flood_fill::remove_checkerboard(&mut grid, config.background);
    log::info!("Processed {} pixels.", fill.processed_pixels);

    image_helper::save(output, &grid, format)?;
    log::info!("Saved to {}", output.display());

    Ok(CheckerboardReport {
        width: grid.width(),
        height: grid.height(),
        fill,
    })
}

/// Flattens the alpha channel of `input` onto the configured background and
/// writes an opaque PNG to `output`. `output` may equal `input`.
pub fn remove_transparency_file(
    input: &Path,
    output: &Path,
    config: &CleanupConfig,
) -> Result<TransparencyReport> {
    log::info!("Processing {}...", input.display());
    let rgba = image_helper::load_rgba(input)?;

    let (grid, stats) = flatten_with_stats(&rgba, config.background);
    drop(rgba);
    log::debug!(
        "Flattened {} transparent and {} translucent pixels",
        stats.transparent_pixels,
        stats.translucent_pixels
    );

    image_helper::save(output, &grid, ImageFormat::Png)?;
    log::info!("Saved image without transparency to: {}", output.display());
    log::info!("Background color: {}", config.background);

    Ok(TransparencyReport {
        width: grid.width(),
        height: grid.height(),
        stats,
    })
}
