pub mod core;
pub mod canvas;
pub mod draw;
pub mod session;
