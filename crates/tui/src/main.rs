mod app;
mod config;
mod error;
mod focus;
mod storage;
mod ui;

use std::{fs, path::Path, sync::Mutex};

use crate::{
    config::AppConfig,
    error::Result,
    storage::{Persister, Storage},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;
    let storage = Storage::new(&config.state_file);
    tracing::info!(state_file = %storage.path().display(), "starting");

    let state = storage.load();
    let app = app::App::new(state, Persister::spawn(storage));
    app.run().await?;
    Ok(())
}

// The terminal is in raw mode while running, so logs go to a file.
fn init_tracing(config: &AppConfig) -> Result<()> {
    if let Some(parent) = Path::new(&config.log_file).parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally_tui={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
