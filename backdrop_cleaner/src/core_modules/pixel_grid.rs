// THEORY:
// The `PixelGrid` is the owned, exclusively-mutable canvas that every cleanup
// operation works on. It replaces the decoder's shared pixel buffer with a plain
// row-major `Vec<Pixel>` plus its dimensions, so the flood fill can take it by
// `&mut` and nothing else can observe it mid-run.
//
// Key architectural principles:
// 1.  **Flat Storage**: Pixels live in one contiguous vector indexed by
//     `y * width + x`. The same indexing scheme is used by the flood fill's
//     visited set, so a `Point` maps to one slot in both.
// 2.  **Codec Boundary**: Conversions to and from `image::RgbImage` are the only
//     place the grid touches the codec library. Everything past that boundary
//     speaks `Pixel` and `Point`.
// 3.  **Dimension Preservation**: No operation on a `PixelGrid` changes its width
//     or height. Conversions round-trip the dimensions exactly.

use crate::core_modules::pixel::pixel::Pixel;
use image::RgbImage;

/// A coordinate on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }
}

/// Offsets of the four axis-aligned neighbors (no diagonals).
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An owned `width × height` grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Creates a grid filled with a single color.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Flat index of a point. The caller guarantees the point is in bounds.
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn get(&self, point: Point) -> Option<Pixel> {
        self.contains(point).then(|| self.pixels[self.index_of(point)])
    }

    /// Overwrites the pixel at `point`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, point: Point, color: Pixel) {
        if self.contains(point) {
            let index = self.index_of(point);
            self.pixels[index] = color;
        }
    }

    /// The four corners in the order top-left, top-right, bottom-left,
    /// bottom-right. Empty for an empty grid. On 1-pixel-wide or -tall grids
    /// corners coincide and are repeated.
    pub fn corners(&self) -> Vec<Point> {
        if self.is_empty() {
            return Vec::new();
        }
        let (right, bottom) = (self.width - 1, self.height - 1);
        vec![
            Point::new(0, 0),
            Point::new(right, 0),
            Point::new(0, bottom),
            Point::new(right, bottom),
        ]
    }

    /// In-bounds 4-connected neighbors of `point`.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |(dx, dy)| {
            let nx = point.x as i64 + dx;
            let ny = point.y as i64 + dy;
            if nx >= 0 && ny >= 0 && nx < self.width as i64 && ny < self.height as i64 {
                Some(Point::new(nx as u32, ny as u32))
            } else {
                None
            }
        })
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|rgb| Pixel::from(*rgb)).collect(),
        }
    }
}

impl From<&PixelGrid> for RgbImage {
    fn from(grid: &PixelGrid) -> Self {
        RgbImage::from_fn(grid.width, grid.height, |x, y| {
            grid.pixels[grid.index_of(Point::new(x, y))].into()
        })
    }
}
