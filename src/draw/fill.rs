// Flood fill over 4-connected regions.
//
// Traversal uses an explicit stack and a visited bitmap, so region size is
// bounded by heap, not call depth. Membership depends only on the colours
// present before the fill and edge adjacency; diagonal contact never joins
// two regions.

use log::debug;

use crate::canvas::{Grid, IntoColor};
use crate::core::{Point, Result};

/// Cells 4-connected to `seed` that share its colour, seed included.
fn collect_region(grid: &Grid, seed: Point) -> Vec<Point> {
    let width = grid.width();
    let target = grid.at(seed);
    let mut visited = vec![false; grid.area()];
    let mut cells = Vec::new();
    let mut stack = vec![seed];
    visited[seed.y * width + seed.x] = true;

    while let Some(p) = stack.pop() {
        cells.push(p);
        for n in p.neighbors4() {
            if !grid.contains(n) { continue; }
            let idx = n.y * width + n.x;
            if !visited[idx] && grid.at(n) == target {
                visited[idx] = true;
                stack.push(n);
            }
        }
    }
    cells
}

/// The region `fill_area` would recolor from `(x, y)`, in unspecified order.
pub fn region(grid: &Grid, x: i64, y: i64) -> Result<Vec<Point>> {
    let seed = grid.point(x, y)?;
    Ok(collect_region(grid, seed))
}

/// Recolors the region containing `(x, y)` and returns its size. Filling a
/// region with its own colour is accepted and leaves the grid unchanged.
pub fn fill_area(grid: &mut Grid, x: i64, y: i64, color: impl IntoColor) -> Result<usize> {
    let seed = grid.point(x, y)?;
    let color = color.into_color()?;
    let cells = collect_region(grid, seed);
    debug!(
        "fill from ({}, {}): {} cells {} -> {}",
        seed.x, seed.y, cells.len(), grid.at(seed), color
    );
    for &p in &cells {
        grid.put(p, color);
    }
    Ok(cells.len())
}
