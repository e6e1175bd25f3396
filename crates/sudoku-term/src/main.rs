//! Terminal Sudoku. Generates a puzzle with a configurable number of
//! revealed cells and plays it in a ratatui grid: arrows move, digits
//! fill, wrong entries show red.

mod app;
mod game;
mod ui;

use std::env;

use sudoku_engine::DEFAULT_HINTS;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the alternate screen stays clean; enable with
    // RUST_LOG and redirect 2> to a file.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let hints = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HINTS);

    if let Err(e) = app::run(hints) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
