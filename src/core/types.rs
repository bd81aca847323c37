use std::fmt;

use serde::{Serialize, Serializer};

use super::error::{EditorError, Result};

/// A single upper-case ASCII letter. Construction is the only validation
/// point, so every `Color` in a grid is valid by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Background used by `I` and `C` when nothing else is configured.
    pub const WHITE: Color = Color(b'O');

    pub fn parse(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [b] if b.is_ascii_uppercase() => Ok(Color(*b)),
            _ => Err(EditorError::InvalidColor(s.to_string())),
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(Color(c as u8))
        } else {
            Err(EditorError::InvalidColor(c.to_string()))
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Zero-indexed cell address: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Edge-sharing neighbours that stay non-negative. Upper bounds are the
    /// caller's concern.
    pub fn neighbors4(self) -> impl Iterator<Item = Point> {
        [(0i64, 1i64), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let nx = self.x as i64 + dx;
                let ny = self.y as i64 + dy;
                if nx >= 0 && ny >= 0 {
                    Some(Point::new(nx as usize, ny as usize))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_uppercase_letters() {
        assert_eq!(Color::parse("A").unwrap().as_char(), 'A');
        assert_eq!(Color::parse("Z").unwrap().as_char(), 'Z');
        assert_eq!("C".parse::<Color>().unwrap(), Color::from_char('C').unwrap());
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "a", "z", "1", "AB", " A", "A ", "É", "-"] {
            assert_eq!(Color::parse(bad), Err(EditorError::InvalidColor(bad.to_string())));
        }
        assert!(Color::from_char('q').is_err());
    }

    #[test]
    fn color_json_is_a_one_char_string() {
        let c = Color::parse("Y").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"Y\"");
        let back: Color = serde_json::from_str("\"Y\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"y\"").is_err());
    }

    #[test]
    fn neighbors_share_an_edge() {
        let mut n: Vec<Point> = Point::new(1, 1).neighbors4().collect();
        n.sort();
        assert_eq!(n, vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 2), Point::new(2, 1)]);

        let corner: Vec<Point> = Point::new(0, 0).neighbors4().collect();
        assert_eq!(corner.len(), 2);
    }
}
