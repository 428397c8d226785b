//! Project file loading: markers, manifest and `packagr.json`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PackagrError, PackagrResult};

use super::types::{parse_package_directory, PackagingConfig, RawPackagingConfig};

pub use crate::domain::value_objects::ConfigWarning;

/// Marker file identifying a serverless project
pub const SERVERLESS_FILE: &str = "serverless.yml";
/// npm package manifest
pub const MANIFEST_FILE: &str = "package.json";
/// Packaging configuration
pub const CONFIG_FILE: &str = "packagr.json";

/// Overrides the configured package directory
pub const ENV_PACKAGE_DIRECTORY: &str = "PACKAGR_PACKAGE_DIRECTORY";
/// Overrides the package manager executable
pub const ENV_NPM: &str = "PACKAGR_NPM";

/// The fields of `package.json` packagr reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Everything read from the project root before packaging starts
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub root: PathBuf,
    pub manifest: ProjectManifest,
    pub config: PackagingConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Check the project markers, then read the manifest and the packaging config.
///
/// Checks run in a fixed order and the first failure is returned, so every
/// invalid project produces exactly one diagnostic.
pub fn load_project(project_root: &Path) -> PackagrResult<LoadedProject> {
    if !project_root.join(SERVERLESS_FILE).exists() {
        return Err(PackagrError::NotServerlessProject {
            root: project_root.to_path_buf(),
        });
    }

    let manifest = load_manifest(&project_root.join(MANIFEST_FILE))?;
    let (config, warnings) = load_with_warnings(&project_root.join(CONFIG_FILE))?;
    let config = with_env_overrides(config)?;

    tracing::debug!(
        root = %project_root.display(),
        microservices = config.microservices.len(),
        package_directory = %config.package_directory,
        "project configuration loaded"
    );

    Ok(LoadedProject {
        root: project_root.to_path_buf(),
        manifest,
        config,
        warnings,
    })
}

/// Read `package.json`
pub fn load_manifest(path: &Path) -> PackagrResult<ProjectManifest> {
    if !path.exists() {
        return Err(PackagrError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let invalid = |message: String| PackagrError::InvalidManifest {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
}

/// Load `packagr.json` and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> PackagrResult<(PackagingConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PackagrError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse and validate `packagr.json` content; `path` is used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PackagrResult<(PackagingConfig, Vec<ConfigWarning>)> {
    let invalid = |message: String| PackagrError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);

    let raw: RawPackagingConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;
    deserializer.end().map_err(|e| invalid(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                path: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((raw.validate()?, warnings))
}

/// Apply environment variable overrides (PACKAGR_* prefix)
pub fn with_env_overrides(config: PackagingConfig) -> PackagrResult<PackagingConfig> {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`; empty values are ignored
pub fn with_overrides_from<F>(mut config: PackagingConfig, lookup: F) -> PackagrResult<PackagingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    // PACKAGR_PACKAGE_DIRECTORY
    if let Some(dir) = get(ENV_PACKAGE_DIRECTORY) {
        config.package_directory = parse_package_directory(&dir)?;
    }

    // PACKAGR_NPM
    if let Some(npm) = get(ENV_NPM) {
        config.npm = Some(npm);
    }

    Ok(config)
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let quoted = format!("\"{}\"", key);
    content
        .lines()
        .position(|line| line.contains(&quoted))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiledSourcesPattern",
        "compiledSources",
        "microservices",
        "packageDirectory",
        "path",
        "packageName",
    ];

    let unknown_lower = unknown.to_lowercase();
    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown_lower, &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
