use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jdfconv",
    about = "Convert JAWS speech dictionary files into screen-reader pronunciation rules",
    version,
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a JAWS dictionary file grammar and report the results
    Import(ImportArgs),
    /// List the target dictionaries an import can be aimed at
    ListTargets,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Path to the JAWS dictionary (.jdf) file.
    /// Falls back to the last imported file when omitted.
    pub file: Option<PathBuf>,

    /// Target dictionary (default, temporary, voice-specific)
    #[arg(long)]
    pub target: Option<String>,

    /// Print each accepted rule, re-serialized in record form
    #[arg(long, default_value_t = false)]
    pub show_rules: bool,

    /// Print each rejected line verbatim
    #[arg(long, default_value_t = false)]
    pub show_rejected: bool,
}
