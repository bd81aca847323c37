pub mod command;
pub mod config;
pub mod repl;

pub use command::{Command, HELP};
pub use config::SessionConfig;
pub use repl::{Outcome, Session};
