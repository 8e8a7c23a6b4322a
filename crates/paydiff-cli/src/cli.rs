use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "paydiff",
    about = "Structural comparison of JSON payloads",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the payload comparison API server
    Serve(ServeArgs),
    /// Compare two JSON files and print the structural diff
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DiffArgs {
    /// The left ("old") JSON document
    pub left: PathBuf,
    /// The right ("new") JSON document
    pub right: PathBuf,
    /// Match array elements by this object key instead of by position
    #[arg(long)]
    pub key: Option<String>,
}
