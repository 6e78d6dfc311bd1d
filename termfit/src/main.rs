mod app;
mod scene;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Fit a terminal grid to the pixel area of its container
#[derive(Parser, Debug)]
#[command(name = "termfit", version, about)]
struct Cli {
    /// Scene file describing the container, padding, cell size and grid
    scene: PathBuf,

    /// Configuration file (defaults to ~/.config/termfit/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load configuration
    let config = termfit_core::Config::load(cli.config)?;
    info!("Loaded configuration: {:?}", config);

    let scene = scene::Scene::load(&cli.scene)?;
    let report = app::App::new(config).run(&scene)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
