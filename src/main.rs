#![windows_subsystem = "windows"]

use anyhow::Result;
use fraudwatch::{config::Config, gui};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Env config is the base; the GUI layers persisted user settings on top
    let config = Config::from_env();
    gui::launch(config)?;

    Ok(())
}
