use std::path::PathBuf;

use clap::Parser;

/// Packagr - deployable zip packaging for multi-service serverless projects
#[derive(Parser, Debug)]
#[command(name = "packagr")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run from a serverless project root containing serverless.yml, package.json and packagr.json."
)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Dry run - print the archive plan without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
}
