//! bowlkit CLI - segmented bowl designer
//!
//! Creates design files and prints ring geometry and cut lists.

use anyhow::Result;
use bowlkit::commands::{self, ReportOverrides};
use bowlkit::{init_logging, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "bowlkit")]
#[command(version, about = "Segmented bowl designer", long_about = None)]
struct Cli {
    /// Config file (.json or .toml); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default design to a file
    New {
        /// Output design file
        file: PathBuf,
        /// Design name stored in the metadata
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print bowl height, radius and ring bounds
    Rings {
        /// Design file
        file: PathBuf,
        /// Inches, whatever units the design was saved with
        #[arg(long)]
        imperial: bool,
    },
    /// Print the segment trapezoids of one ring
    Ring {
        /// Design file
        file: PathBuf,
        /// Ring index, 0 is the base
        index: usize,
        /// Keep every segment in its local frame
        #[arg(long)]
        no_rotate: bool,
    },
    /// Print the cut list using the units and kerf saved with the design
    Report {
        /// Design file
        file: PathBuf,
        /// Inches instead of the design's units
        #[arg(long)]
        imperial: bool,
        /// Inch fraction denominator (16 renders 1/16")
        #[arg(long)]
        step: Option<u32>,
        /// Saw kerf in millimetres, replacing the design's kerf
        #[arg(long)]
        kerf: Option<f64>,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(&path)?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(e) => {
                debug!("{e}; using default config");
                Config::default()
            }
        },
    };
    Ok(config)
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Commands::New { file, name } => {
            commands::new_design(&file, name, &config)?;
        }
        Commands::Rings { file, imperial } => {
            print!("{}", commands::rings_summary(&file, imperial)?);
        }
        Commands::Ring {
            file,
            index,
            no_rotate,
        } => {
            print!("{}", commands::ring_segments(&file, index, !no_rotate)?);
        }
        Commands::Report {
            file,
            imperial,
            step,
            kerf,
        } => {
            let overrides = ReportOverrides {
                imperial,
                step,
                kerf,
            };
            print!("{}", commands::report(&file, &config, &overrides)?);
        }
    }

    Ok(())
}
