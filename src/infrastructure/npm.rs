//! npm package manager adapter
//!
//! Runs `npm ls --prod=true --parseable=true --long=false --silent` in the
//! scope directory and reads one path per stdout line.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{PackageManager, PackageManagerError};

/// Arguments listing the installed production tree, one directory per line
pub const NPM_LS_ARGS: [&str; 5] = [
    "ls",
    "--prod=true",
    "--parseable=true",
    "--long=false",
    "--silent",
];

#[cfg(windows)]
const DEFAULT_NPM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_NPM: &str = "npm";

/// `npm` invoked as a subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmCli {
    program: String,
}

impl NpmCli {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_NPM.to_string(),
        }
    }

    /// Use a specific executable instead of `npm` from `PATH`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for NpmCli {
    fn production_dependencies(&self, scope: &Path) -> Result<Vec<PathBuf>, PackageManagerError> {
        if !scope.is_dir() {
            return Err(PackageManagerError::MissingScope(scope.to_path_buf()));
        }

        tracing::debug!(program = %self.program, scope = %scope.display(), "listing production dependencies");

        let output = Command::new(&self.program)
            .args(NPM_LS_ARGS)
            .current_dir(scope)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PackageManagerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PackageManagerError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(parse_parseable(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split `--parseable` output into paths, skipping blank lines
pub fn parse_parseable(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
