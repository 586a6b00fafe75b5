//! Command-line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "badge-maker", version, about = "Fill a Word name-badge template")]
pub struct Cli {
    /// Settings file to use instead of the per-user one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one badge from command-line values
    Generate(GenerateArgs),

    /// Fill in the badge form interactively (default command)
    Form(LocationArgs),

    /// Show the settings, or write the defaults with --init
    Config {
        /// Write default settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

/// Template and output locations
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Template document to fill
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory the badge is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// First person's name
    #[arg(long)]
    pub name1: String,

    /// First person's company
    #[arg(long)]
    pub company1: String,

    /// Second person's name
    #[arg(long)]
    pub name2: Option<String>,

    /// Second person's company
    #[arg(long)]
    pub company2: Option<String>,

    /// Make a single-person badge
    #[arg(long)]
    pub single: bool,

    /// Insert a space between characters
    #[arg(long)]
    pub spaces: bool,

    /// Do not space characters, even if the settings say to
    #[arg(long, conflicts_with = "spaces")]
    pub no_spaces: bool,

    /// Do not open the badge after generating
    #[arg(long)]
    pub no_open: bool,

    #[command(flatten)]
    pub location: LocationArgs,
}
