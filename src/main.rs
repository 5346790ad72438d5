//! Tic-tac-toe GUI
//!
//! A graphical two-player game with move history and time travel.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tictactoe::ui::TicTacToeApp;
use tictactoe::Config;

fn main() -> eframe::Result {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    tracing::info!(descending = config.descending, "tic-tac-toe starting up");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([560.0, 380.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    );

    tracing::info!("tic-tac-toe shutting down");
    result
}
