pub mod error;
pub mod types;

pub use error::{Axis, EditorError, Result};
pub use types::{Color, Point};
