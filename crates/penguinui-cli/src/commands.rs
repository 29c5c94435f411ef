use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "penguinui")]
#[command(version = "0.1.0")]
#[command(propagate_version = true)]
#[command(about = "Share CSS declaration packages across stylesheets", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Only print errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expands @package/@use directives in a stylesheet
    #[command(alias = "b")]
    Build {
        /// The stylesheet to build
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
        /// Directory holding package descriptors
        #[arg(short = 'p', long, default_value = penguinui_constants::PACKAGES_DIR)]
        packages: PathBuf,
        /// Enable experimental directives
        #[arg(long)]
        experimental: bool,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Downloads a package descriptor from a URL
    #[command(alias = "i")]
    Add {
        /// URL of the descriptor JSON
        url: String,
        /// Directory holding package descriptors
        #[arg(short = 'p', long, default_value = penguinui_constants::PACKAGES_DIR)]
        packages: PathBuf,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Lists installed packages
    #[command(alias = "ls")]
    List {
        /// Directory holding package descriptors
        #[arg(short = 'p', long, default_value = penguinui_constants::PACKAGES_DIR)]
        packages: PathBuf,
    },
    /// Removes an installed package
    #[command(alias = "rm")]
    Remove {
        /// Name of the package to remove
        name: Option<String>,
        /// Directory holding package descriptors
        #[arg(short = 'p', long, default_value = penguinui_constants::PACKAGES_DIR)]
        packages: PathBuf,
    },
    /// Generates package descriptors from CSS class rules
    #[command(alias = "gen")]
    Generate {
        /// CSS files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Directory the descriptors are written to
        #[arg(short = 'o', long, default_value = penguinui_constants::DEFAULT_GENERATE_OUT)]
        out: PathBuf,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Shows help information for penguinui or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}
