use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tictactoe::config::Config;
use tictactoe::logging::init_tracing;
use tictactoe::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Terminal tic-tac-toe with move history")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not capture the mouse (cells can still be played from the keyboard)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, source) = match &cli.config {
        Some(path) => (Config::load_from(path)?, path.clone()),
        None => (Config::load()?, Config::config_path()),
    };
    apply_overrides(&mut config, cli);

    init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(config = %source.display(), "starting");

    runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }
}
