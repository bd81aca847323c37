pub mod fill;
pub mod line;

pub use fill::{fill_area, region};
pub use line::{draw_horizontal_segment, draw_vertical_segment, fill_rect};
