//! CLI argument definitions for povercat.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "povercat",
    version,
    about = "Portable version catalog generator",
    long_about = "povercat turns Gradle version catalogs (TOML) into Kotlin classes that expose \
                  every version, library, bundle and plugin as a typed, immutable constant."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Kotlin catalog classes
    Generate {
        /// Catalog files (defaults to the `catalogs` list in Povercat.toml)
        catalogs: Vec<PathBuf>,
        /// Kotlin package of the generated classes
        #[arg(short, long)]
        package: Option<String>,
        /// Base output directory for generated sources
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Project version shown in the generated documentation
        #[arg(long)]
        project_version: Option<String>,
    },

    /// Show the entries a catalog would generate
    Inspect {
        /// Catalog file
        catalog: PathBuf,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
