use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use lettermark::IconConfig;

/// Generate the AZ Barber lettermark icon assets
#[derive(Parser, Debug)]
#[command(name = "lettermark", version, about)]
struct Cli {
    /// Project root that relative paths are resolved against [default: .]
    #[arg(long)]
    root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the PNG assets (must exist)
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Directory containing the font packages
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Also write a JSON manifest of the exported assets
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => IconConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => IconConfig::default(),
    };
    if let Some(root) = cli.root {
        config.project_root = root;
    }
    if let Some(dir) = cli.assets_dir {
        config.assets_dir = dir;
    }
    if let Some(dir) = cli.fonts_dir {
        config.fonts_dir = dir;
    }

    info!("Generating AZ Barber Logo - Concept A (Lettermark)");
    let assets = lettermark::generate_all(&config).context("generating icon assets")?;

    if let Some(path) = cli.manifest {
        lettermark::write_manifest(&path, &assets)
            .with_context(|| format!("writing manifest {}", path.display()))?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
