// THEORY:
// The flood fill is the engine of the checkerboard remover. It implements a
// multi-source breadth-first "Corner Seeding and Region Growing" pass over the
// pixel grid.
//
// Key architectural principles & algorithm steps:
// 1.  **Corner Seeding**: The four image corners are the only fill origins. The
//     remover assumes the checkerboard fully occupies the image border and that
//     real content is enclosed by it. A corner whose pixel is not background
//     simply contributes no origin; there is no partial-corner heuristic.
// 2.  **Region Growing**: From the seeds the fill expands to 4-connected
//     neighbors (no diagonals) whose original color satisfies the membership
//     predicate. Only connectivity to the border matters, so a background-colored
//     island fully enclosed by content is never reached and is preserved.
// 3.  **Visited Before Queued**: A point is marked in the flat visited array at
//     the moment it is enqueued, never later. This keeps every point in the queue
//     at most once and guarantees termination on a finite grid.
// 4.  **Overwrite On Dequeue**: A pixel is overwritten with the target color when
//     it leaves the queue. Because neighbors are checked against the visited
//     array first, the predicate only ever sees colors the fill has not touched.
// 5.  **Stateless Utility**: Visited array and queue are created per call and
//     dropped when it returns. The grid is borrowed mutably for the duration.

use crate::core_modules::checkerboard::is_background;
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::pixel_grid::{PixelGrid, Point};

pub mod flood_fill {
    use super::*; // Make grid types and the classifier available.
    use std::collections::VecDeque;

    /// Counts reported by a fill run, for diagnostics.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct FillReport {
        /// How many distinct corners matched the predicate and seeded the fill.
        pub seeded_corners: usize,
        /// How many pixels were overwritten with the target color.
        pub processed_pixels: usize,
    }

    /// Replaces every checkerboard pixel reachable from the image corners with
    /// `target`.
    pub fn remove_checkerboard(grid: &mut PixelGrid, target: Pixel) -> FillReport {
        fill_from_corners(grid, target, is_background)
    }

    /// Breadth-first fill from the four corners over 4-connected neighbors that
    /// satisfy `is_member`. Matched pixels are overwritten with `target`.
    pub fn fill_from_corners<F>(grid: &mut PixelGrid, target: Pixel, is_member: F) -> FillReport
    where
        F: Fn(Pixel) -> bool,
    {
        let mut visited = vec![false; grid.len()];
        let mut queue: VecDeque<Point> = VecDeque::new();

        // --- 1. Corner Seeding ---
        for corner in grid.corners() {
            let index = grid.index_of(corner);
            // Corners coincide on 1-pixel-wide or -tall images.
            if visited[index] {
                continue;
            }
            if grid.get(corner).is_some_and(&is_member) {
                visited[index] = true;
                queue.push_back(corner);
            }
        }
        let seeded_corners = queue.len();
        log::info!("Starting flood fill from {} corners...", seeded_corners);

        // --- 2. Region Growing ---
        let mut processed_pixels = 0;
        while let Some(current) = queue.pop_front() {
            grid.set(current, target);
            processed_pixels += 1;

            for neighbor in grid.neighbors(current) {
                let index = grid.index_of(neighbor);
                if visited[index] {
                    continue;
                }
                if grid.get(neighbor).is_some_and(&is_member) {
                    visited[index] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        FillReport {
            seeded_corners,
            processed_pixels,
        }
    }
}
