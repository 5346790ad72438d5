//! Command-line configuration
//!
//! Logging honours `RUST_LOG` first and falls back to `--log-level`.

use clap::Parser;

const DEFAULT_WIDTH: f32 = 720.0;
const DEFAULT_HEIGHT: f32 = 520.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe with move history and time travel")]
pub struct Config {
    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descending: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn window_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}
