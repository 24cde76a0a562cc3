// THEORY:
// Alpha flattening composites an RGBA image onto a solid, opaque background using
// the standard "over" operator. It is a per-pixel pass with no spatial state:
//
//     out = round(src * a/255 + bg * (1 - a/255))
//
// computed independently for R, G and B. The blend is done in integers as
// `(src*a + bg*(255-a) + 127) / 255`. Since 255 is odd the exact quotient never
// lands on .5, so this is the same as rounding the real-valued formula.
//
// Channels are blended as stored (gamma-encoded 8-bit). There is no conversion to
// linear light.

use crate::core_modules::pixel::pixel::{Channel, Pixel};
use crate::core_modules::pixel_grid::{PixelGrid, Point};
use image::{Rgba, RgbaImage};

const OPAQUE: Channel = u8::MAX;

/// What the flattener saw while compositing, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Pixels with alpha 0, replaced by the background outright.
    pub transparent_pixels: usize,
    /// Pixels with alpha strictly between 0 and 255, blended.
    pub translucent_pixels: usize,
}

/// Composites a single channel of `src` at opacity `alpha` over `bg`.
#[inline]
pub fn blend_channel(src: Channel, bg: Channel, alpha: Channel) -> Channel {
    let a = alpha as u32;
    ((src as u32 * a + bg as u32 * (OPAQUE as u32 - a) + 127) / 255) as Channel
}

/// Composites one RGBA pixel over an opaque background.
pub fn composite_over(src: Rgba<u8>, background: Pixel) -> Pixel {
    let [r, g, b, alpha] = src.0;
    match alpha {
        0 => background,
        OPAQUE => Pixel::new(r, g, b),
        _ => Pixel::new(
            blend_channel(r, background.red, alpha),
            blend_channel(g, background.green, alpha),
            blend_channel(b, background.blue, alpha),
        ),
    }
}

/// Flattens `rgba` onto `background`, producing an opaque grid of identical
/// dimensions.
pub fn flatten(rgba: &RgbaImage, background: Pixel) -> PixelGrid {
    flatten_with_stats(rgba, background).0
}

/// Same as [`flatten`], also reporting how many pixels were not fully opaque.
pub fn flatten_with_stats(rgba: &RgbaImage, background: Pixel) -> (PixelGrid, FlattenStats) {
    let mut grid = PixelGrid::new(rgba.width(), rgba.height(), background);
    let mut stats = FlattenStats::default();

    for (x, y, src) in rgba.enumerate_pixels() {
        match src.0[3] {
            0 => {
                stats.transparent_pixels += 1;
                continue;
            }
            OPAQUE => {}
            _ => stats.translucent_pixels += 1,
        }
        grid.set(Point::new(x, y), composite_over(*src, background));
    }

    (grid, stats)
}
