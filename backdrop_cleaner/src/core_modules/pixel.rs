// THEORY:
// The `Pixel` module is the most fundamental unit of the cleanup tools. It is a
// "dumb" data container for a single opaque RGB color. Every other module either
// reads pixels (the checkerboard classifier), writes them (the flood fill), or
// produces them (the alpha flattener).
//
// Key principles:
// 1) Opaque only: the grids the core works on are 3-channel. Alpha is consumed by
//    the flattener before a `Pixel` is ever built.
// 2) Value type: `Pixel` is `Copy`, so passing it by value into predicates is free
//    and there is never a question of who owns a color.
// 3) Parsing lives with the type: background overrides arrive from the command line
//    as text, as `r,g,b`, `#rrggbb`, or the `RGB(r, g, b)` form `Display` prints.

pub mod pixel {
    use crate::error::CleanupError;
    use std::fmt;
    use std::str::FromStr;

    pub type Byte = u8;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 3;

    /// A "dumb" data container representing a single opaque RGB pixel.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Pixel {
        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }

        /// The three channels in R, G, B order.
        pub fn channels(&self) -> [Channel; CHANNELS] {
            [self.red, self.green, self.blue]
        }

        /// True when every channel satisfies `bound`.
        ///
        /// Used by the classifier, which only accepts a color when all three
        /// channels agree on the same tile.
        pub fn all_channels(&self, bound: impl Fn(Channel) -> bool) -> bool {
            self.channels().into_iter().all(bound)
        }
    }

    impl From<[Byte; CHANNELS]> for Pixel {
        fn from(bytes: [Byte; CHANNELS]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2])
        }
    }

    impl From<Pixel> for [Byte; CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            pixel.channels()
        }
    }

    impl From<image::Rgb<u8>> for Pixel {
        fn from(rgb: image::Rgb<u8>) -> Self {
            Pixel::from(rgb.0)
        }
    }

    impl From<Pixel> for image::Rgb<u8> {
        fn from(pixel: Pixel) -> Self {
            image::Rgb(pixel.channels())
        }
    }

    impl fmt::Display for Pixel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
        }
    }

    impl FromStr for Pixel {
        type Err = CleanupError;

        /// Accepts `r,g,b` (decimal, whitespace tolerated), `#rrggbb`, or the
        /// `RGB(r, g, b)` form produced by `Display`.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let trimmed = s.trim();
            let invalid = || CleanupError::InvalidColor(s.to_string());

            if let Some(hex) = trimmed.strip_prefix('#') {
                // from_str_radix alone would let a leading `+` through.
                if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(invalid());
                }
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
                };
                return Ok(Pixel::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
            }

            let decimal = trimmed
                .strip_prefix("RGB(")
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap_or(trimmed);
            let parts = decimal
                .split(',')
                .map(|part| part.trim().parse::<Channel>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?;
            match parts.as_slice() {
                [red, green, blue] => Ok(Pixel::new(*red, *green, *blue)),
                _ => Err(invalid()),
            }
        }
    }
}
