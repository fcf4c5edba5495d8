//! draw-number - console entry point
//!
//! Plays the game on the terminal, echoing every event to standard output
//! and to `output.log`.

use std::path::Path;

use anyhow::{Context, Result};
use draw_number::{ConsoleView, DrawNumberApp, DrawNumberView, PrintStreamView};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "resources/config.yml";
const LOG_PATH: &str = "output.log";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let log_view = PrintStreamView::create(Path::new(LOG_PATH))
        .with_context(|| format!("failed to create {LOG_PATH}"))?;

    let views: Vec<Box<dyn DrawNumberView>> = vec![
        Box::new(ConsoleView::new()),
        Box::new(PrintStreamView::stdout()),
        Box::new(log_view),
    ];

    let app = DrawNumberApp::new(CONFIG_PATH, views)?;
    info!("Game started");

    app.wait();
    Ok(())
}
