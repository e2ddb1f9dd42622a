use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use minesweeper_client::config::Config;
use minesweeper_client::logging::init_tracing;
use minesweeper_client::ui::runtime;

/// Terminal client for a minesweeper game engine.
#[derive(Debug, Parser)]
#[command(name = "minesweeper-client", version, about)]
struct Cli {
    /// Config file (default: platform config dir/minesweeper-client/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine base URL, overrides the config file.
    #[arg(long)]
    engine_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log.level);
    runtime::run(config).await
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if let Some(url) = &cli.engine_url {
        config.engine.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}
