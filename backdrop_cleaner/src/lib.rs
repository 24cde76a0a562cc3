// THEORY:
// This file is the main entry point for the `backdrop_cleaner` library crate.
// It exports two cleanup operations for raster images:
//
// - checkerboard removal: a corner-seeded flood fill that replaces a baked-in
//   transparency checkerboard with a solid background color;
// - transparency removal: "over" compositing of an RGBA image onto that same
//   solid background.
//
// The `pipeline` module is the high-level, file-in/file-out interface. The pixel
// operations in `core_modules` are public as well, so they can be driven directly
// on in-memory grids.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use error::CleanupError;
