use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use quipbot::config::{get_config, initialize_config};
use quipbot::logging::init_logging;
use quipbot::{console, ui, ChatSession};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Full-screen terminal UI
    Tui,
    /// Plain line-by-line console
    Console,
}

#[derive(Parser, Debug)]
#[command(name = "quipbot", version, about = "Chat with a friendly canned bot")]
struct Cli {
    /// Front end to run
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_config(cli.config.as_deref()).context("failed to load configuration")?;
    let config = get_config();
    let _logger = init_logging(&config).context("failed to start logger")?;
    info!("starting quipbot in {:?} mode", cli.mode);

    let session = ChatSession::new(&config);
    match cli.mode {
        Mode::Tui => ui::run_tui(session).await?,
        Mode::Console => console::run_console(session).await?,
    }

    Ok(())
}
