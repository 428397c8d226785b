use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use packagr::application::{PackageOptions, PackageResult, PackageUseCase};
use packagr::config::{self, LoadedProject};
use packagr::infrastructure::{JsonEventSink, NpmCli, WalkGlobMatcher, ZipArchiveWriter};

use crate::ui::ci::{is_github_actions, warning_annotation};
use crate::ui::json::{emit, result_event, warning_event};
use crate::ui::output::{print_banner, print_config_warnings, print_result};

/// Canonical project root, captured once for the whole run
pub fn resolve_project_root(project_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };
    dir.canonicalize()
        .with_context(|| format!("Cannot open project directory '{}'", dir.display()))
}

pub fn cmd_package(
    project_dir: Option<&Path>,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let root = resolve_project_root(project_dir)?;
    let project = config::load_project(&root)?;

    report_warnings(&project, json);
    if !json {
        print_banner(project.manifest.name.as_deref());
    }

    let npm = project
        .config
        .npm
        .clone()
        .map(NpmCli::with_program)
        .unwrap_or_default();
    tracing::debug!(npm = %npm.program(), "package manager");

    let options = PackageOptions::from_config(&root, &project.config).with_dry_run(dry_run);
    let use_case = PackageUseCase::new(npm, WalkGlobMatcher::new(), ZipArchiveWriter::new());

    let result = if json {
        use_case.execute_with_events(&options, Arc::new(JsonEventSink::stdout()))?
    } else {
        use_case.execute(&options)?
    };

    report_result(&result, json, verbose)
}

fn report_warnings(project: &LoadedProject, json: bool) {
    if json {
        for warning in &project.warnings {
            let _ = emit(warning_event(warning));
        }
        return;
    }

    print_config_warnings(&project.warnings);
    if is_github_actions() {
        for warning in &project.warnings {
            println!("{}", warning_annotation(warning));
        }
    }
}

fn report_result(result: &PackageResult, json: bool, verbose: u8) -> Result<()> {
    if json {
        emit(result_event(result)).context("Cannot write to stdout")?;
    } else {
        print_result(result, verbose);
    }
    Ok(())
}
