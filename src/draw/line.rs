// Axis-aligned segment and rectangle drawing.
//
// Segments are undirected: endpoints are reordered before iterating the
// inclusive range. Every coordinate and the colour are checked before the
// first write, so a rejected call leaves the grid as it was.

use log::debug;

use crate::canvas::{Grid, IntoColor};
use crate::core::{Point, Result};

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a > b { (b, a) } else { (a, b) }
}

/// Sets column `x` from row `y1` to row `y2`, both inclusive.
pub fn draw_vertical_segment(grid: &mut Grid, x: i64, y1: i64, y2: i64, color: impl IntoColor) -> Result<()> {
    let x = grid.check_x(x)?;
    let (y1, y2) = ordered(grid.check_y(y1)?, grid.check_y(y2)?);
    let color = color.into_color()?;
    debug!("vertical segment x={} y={}..={} color={}", x, y1, y2, color);
    for y in y1..=y2 {
        grid.put(Point::new(x, y), color);
    }
    Ok(())
}

/// Sets row `y` from column `x1` to column `x2`, both inclusive.
pub fn draw_horizontal_segment(grid: &mut Grid, x1: i64, x2: i64, y: i64, color: impl IntoColor) -> Result<()> {
    let (x1, x2) = ordered(grid.check_x(x1)?, grid.check_x(x2)?);
    let y = grid.check_y(y)?;
    let color = color.into_color()?;
    debug!("horizontal segment y={} x={}..={} color={}", y, x1, x2, color);
    for x in x1..=x2 {
        grid.put(Point::new(x, y), color);
    }
    Ok(())
}

/// Fills the inclusive rectangle spanned by two opposite corners, given in
/// any order.
pub fn fill_rect(grid: &mut Grid, x1: i64, y1: i64, x2: i64, y2: i64, color: impl IntoColor) -> Result<usize> {
    let (x1, x2) = ordered(grid.check_x(x1)?, grid.check_x(x2)?);
    let (y1, y2) = ordered(grid.check_y(y1)?, grid.check_y(y2)?);
    let color = color.into_color()?;
    debug!("rect ({}, {})..=({}, {}) color={}", x1, y1, x2, y2, color);
    for y in y1..=y2 {
        for x in x1..=x2 {
            grid.put(Point::new(x, y), color);
        }
    }
    Ok((x2 - x1 + 1) * (y2 - y1 + 1))
}
