use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use doshell::config::Config;
use doshell::menu::Menu;

/// doshell - a DOS-flavored command shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Path to the DOS-to-native mapping file
    #[arg(short, long)]
    mapping_file: Option<PathBuf>,

    /// Execute a single DOS command line and exit
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr so command output on stdout stays pipeable
    let log_level = if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    // Load configuration
    let mut config = if let Some(config_path) = args.config {
        Config::load_from_file(&config_path)?
    } else {
        Config::load_default()?
    };

    // Override the mapping file if specified
    if let Some(mapping_file) = args.mapping_file {
        config.mapping.file = mapping_file;
    }

    let mut menu = Menu::new(config);

    // One-shot mode: translate and run a single command, then exit
    if let Some(command) = args.execute {
        if !menu.run_once(&command)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    menu.run()
}
