//! Packagr CLI - deployable zip packaging for serverless projects
//!
//! Usage: packagr [--json] [-v...] [--dry-run] [--project-dir <DIR>]
//!
//! Collects the compiled sources, the production dependencies of the project
//! and of its sibling microservices, and writes them to
//! `<packageDirectory>/package.zip`.

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    ui::logging::init(cli.verbose, ui::terminal::stderr_supports_color());

    let result = commands::package::cmd_package(
        cli.project_dir.as_deref(),
        cli.dry_run,
        cli.json,
        cli.verbose,
    );

    if let Err(err) = result {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
