use clap::Parser;
use jukebox::assets::Category;
use jukebox::config::{Overrides, Settings};
use jukebox::core::format_error_with_help;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "jukebox")]
#[command(about = "Extract music and sound effects from a local Minecraft installation")]
#[command(version)]
struct Cli {
    /// Minecraft game folder (defaults to the platform's .minecraft location)
    #[arg(short = 'm', long)]
    minecraft_dir: Option<PathBuf>,

    /// Folder to export files into (defaults to the current directory)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Asset index version to use, e.g. "1.12" (defaults to the latest installed)
    #[arg(short = 'a', long)]
    assets_version: Option<String>,

    /// Replace files that already exist in the export folder
    #[arg(short, long)]
    overwrite: bool,

    /// Extract without the interactive menu: "music" or "sounds"
    #[arg(short, long)]
    category: Option<Category>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = Overrides {
        minecraft_dir: cli.minecraft_dir,
        export_dir: cli.export_dir,
        assets_version: cli.assets_version,
        overwrite: cli.overwrite,
        category: cli.category,
    };

    let result = Settings::load(cli.config.as_deref(), overrides)
        .and_then(|settings| cli::extract::run(&settings));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
