// Rectangular colour grid.
//
// Cells are stored row-major in a flat vector; `(x, y)` addresses column `x`
// of row `y`, both zero-indexed and half-open: `[0, width) x [0, height)`.
// There is no empty cell: every slot holds a valid `Color` from creation on.

use std::fmt;

use log::{debug, trace};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::{Axis, Color, EditorError, Point, Result};

/// Anything an operation accepts as a colour argument. Raw text is validated
/// here so every mutating operation rejects bad colours the same way.
pub trait IntoColor {
    fn into_color(self) -> Result<Color>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color> {
        Ok(self)
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color> {
        Color::parse(self)
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color> {
        Color::parse(self)
    }
}

impl IntoColor for char {
    fn into_color(self) -> Result<Color> {
        Color::from_char(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Color>,
}

impl Grid {
    pub fn create(height: i64, width: i64, color: impl IntoColor) -> Result<Self> {
        let color = color.into_color()?;
        if height <= 0 || width <= 0 {
            return Err(EditorError::InvalidDimensions { height, width });
        }
        let (height, width) = (height as usize, width as usize);
        let too_large = EditorError::InvalidDimensions { height: height as i64, width: width as i64 };
        let len = height.checked_mul(width).ok_or_else(|| too_large.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, color);
        debug!("creating {}x{} grid filled with {}", height, width, color);
        Ok(Self { height, width, cells })
    }

    pub fn height(&self) -> usize { self.height }
    pub fn width(&self) -> usize { self.width }
    pub fn area(&self) -> usize { self.cells.len() }

    pub fn clear(&mut self, color: impl IntoColor) -> Result<()> {
        let color = color.into_color()?;
        debug!("clearing grid to {}", color);
        self.cells.fill(color);
        Ok(())
    }

    /// Validates a caller-supplied coordinate pair against the grid bounds.
    pub fn point(&self, x: i64, y: i64) -> Result<Point> {
        Ok(Point::new(self.check_x(x)?, self.check_y(y)?))
    }

    pub(crate) fn check_x(&self, x: i64) -> Result<usize> {
        check_axis(Axis::X, x, self.width)
    }

    pub(crate) fn check_y(&self, y: i64) -> Result<usize> {
        check_axis(Axis::Y, y, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub fn set_cell(&mut self, x: i64, y: i64, color: impl IntoColor) -> Result<()> {
        let p = self.point(x, y)?;
        let color = color.into_color()?;
        self.put(p, color);
        Ok(())
    }

    pub fn get_cell(&self, x: i64, y: i64) -> Result<Color> {
        let p = self.point(x, y)?;
        Ok(self.at(p))
    }

    /// Unchecked write for points already validated by `point` or `contains`.
    pub(crate) fn put(&mut self, p: Point, color: Color) {
        trace!("set ({}, {}) = {}", p.x, p.y, color);
        let idx = p.y * self.width + p.x;
        self.cells[idx] = color;
    }

    pub(crate) fn at(&self, p: Point) -> Color {
        self.cells[p.y * self.width + p.x]
    }

    /// Rows top to bottom, each yielding its cells left to right.
    pub fn render(&self) -> impl Iterator<Item = impl Iterator<Item = char> + '_> + '_ {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.as_char()))
    }

    pub fn rows(&self) -> Vec<String> {
        self.render().map(|row| row.collect()).collect()
    }
}

fn check_axis(axis: Axis, value: i64, bound: usize) -> Result<usize> {
    if value >= 0 && (value as u64) < bound as u64 {
        Ok(value as usize)
    } else {
        Err(EditorError::OutOfRange { axis, value, bound })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            for c in row {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Grid", 3)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("rows", &self.rows())?;
        s.end()
    }
}
