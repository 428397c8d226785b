//! Human-readable output
//!
//! Render functions return strings so they can be snapshot-tested; the
//! `print_*` wrappers pick the stream. Results go to stdout, everything else
//! to stderr.

use packagr::application::PackageResult;
use packagr::config::ConfigWarning;
use packagr::domain::ports::ArchiveReport;

pub const TAG: &str = "[Packagr]";

pub fn render_banner(service: Option<&str>) -> String {
    format!(
        "{} Packaging lambdas source codes for service {}\n",
        TAG,
        service.unwrap_or("(unnamed)")
    )
}

pub fn render_config_warning(warning: &ConfigWarning) -> String {
    format!("{} Warning: {}\n", TAG, warning)
}

pub fn render_success(report: &ArchiveReport, verbose: u8) -> String {
    let mut out = format!(
        "{tag} Zip file successfully created\n{tag} {} total bytes\n",
        report.bytes,
        tag = TAG
    );
    if verbose > 0 {
        out.push_str(&format!(
            "{} {} entries in {}\n{} {}\n",
            TAG,
            report.written,
            report.archive.display(),
            TAG,
            report.digest
        ));
    }
    out
}

pub fn render_skipped(skipped: &[String]) -> String {
    skipped
        .iter()
        .map(|source| format!("{} Skipped missing file {}\n", TAG, source))
        .collect()
}

pub fn render_plan(result: &PackageResult) -> String {
    let mut out = String::new();
    for (source, destination) in result.plan.iter() {
        out.push_str(&format!("{} -> {}\n", source, destination));
    }
    out.push_str(&format!(
        "{} Dry run: {} entries from {} dependencies, nothing written\n",
        TAG,
        result.plan.len(),
        result.dependencies.len()
    ));
    out
}

pub fn print_banner(service: Option<&str>) {
    eprint!("{}", render_banner(service));
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprint!("{}", render_config_warning(warning));
    }
}

pub fn print_result(result: &PackageResult, verbose: u8) {
    match &result.archive {
        Some(report) => {
            eprint!("{}", render_skipped(&report.skipped));
            print!("{}", render_success(report, verbose));
        }
        None => print!("{}", render_plan(result)),
    }
}
