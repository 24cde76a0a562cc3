// THEORY:
// The checkerboard classifier decides, for a single color, whether it belongs to
// the baked-in transparency pattern or to real image content. It knows nothing
// about neighbors or position; connectivity is the flood fill's job.
//
// The pattern it recognizes is the common two-tone editor backdrop: pure white
// tiles (255) alternating with light-gray tiles (232, 0xE8). The bounds below were
// calibrated against that pattern after lossy round-trips and are not meant as a
// general background detector.

use crate::core_modules::pixel::pixel::{Channel, Pixel};

/// Every channel of a white tile must be strictly above this value.
pub const WHITE_TILE_FLOOR: Channel = 250;

/// Every channel of a gray tile must be strictly above this value...
pub const GRAY_TILE_LOWER: Channel = 220;

/// ...and strictly below this one.
pub const GRAY_TILE_UPPER: Channel = 245;

/// Returns true if `color` looks like a checkerboard tile.
///
/// All three channels must satisfy the same tile's bounds. A color that is
/// white-ish in two channels but not the third (typical of anti-aliased content
/// edges) is content.
pub fn is_background(color: Pixel) -> bool {
    is_white_tile(color) || is_gray_tile(color)
}

fn is_white_tile(color: Pixel) -> bool {
    color.all_channels(|c| c > WHITE_TILE_FLOOR)
}

fn is_gray_tile(color: Pixel) -> bool {
    color.all_channels(|c| c > GRAY_TILE_LOWER && c < GRAY_TILE_UPPER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn white_tile_boundary_is_exclusive() {
        assert!(is_background(gray(251)));
        assert!(is_background(gray(255)));
        assert!(!is_background(gray(250)));
    }

    #[test]
    fn gray_tile_window() {
        assert!(is_background(gray(232)));
        assert!(is_background(gray(221)));
        assert!(is_background(gray(244)));
        assert!(!is_background(gray(220)));
        assert!(!is_background(gray(219)));
        assert!(!is_background(gray(245)));
    }

    #[test]
    fn between_the_two_tiles_is_content() {
        for v in 245..=250 {
            assert!(!is_background(gray(v)), "{v} should be content");
        }
    }

    #[test]
    fn partial_matches_are_content() {
        assert!(!is_background(Pixel::new(232, 232, 200)));
        assert!(!is_background(Pixel::new(255, 255, 240)));
        // one channel in each tile's range
        assert!(!is_background(Pixel::new(255, 232, 255)));
    }

    #[test]
    fn default_background_is_not_a_tile() {
        assert!(!is_background(Pixel::new(15, 15, 20)));
    }
}
