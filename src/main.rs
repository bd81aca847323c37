use std::io;

use anyhow::Context;
use log::info;

use bitmap_editor::session::{Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only prompts and images.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_env().context("failed to load session config")?;
    info!("config: {:?}", config);

    println!("Bitmap editor. Type ? for help, X to quit.");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(config)
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;
    Ok(())
}
