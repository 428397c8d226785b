//! Test environment builder for isolated Packagr testing.
//!
//! Provides `TestEnv` - a temp workspace holding the `api` project and its
//! sibling `users` service. `npm` is replaced by a shell script that prints
//! the `.npm-ls` file of the directory it runs in, or fails when there is none.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::*;

/// Listing printed by the fake `npm ls` in each scope
const LISTING_FILE: &str = ".npm-ls";

/// Result of running the packagr binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated workspace with an `api` project and a sibling `users` service
pub struct TestEnv {
    workspace: TempDir,
    npm: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Workspace root, parent of both services
    pub fn workspace(&self) -> PathBuf {
        canonical(self.workspace.path())
    }

    /// Path relative to the `api` project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.workspace().join("api").join(relative)
    }

    /// Write a file relative to the workspace root
    pub fn write_file(&self, relative: &str, content: &str) {
        write(&self.workspace().join(relative), content);
    }

    /// Run packagr from the `api` project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(&self.project_path(""), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.project_path(""), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_packagr"));
        cmd.current_dir(cwd)
            .args(args)
            .env("PACKAGR_NPM", &self.npm)
            .env("NO_COLOR", "1")
            .env_remove("PACKAGR_PACKAGE_DIRECTORY")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute packagr");
        to_result(output)
    }

    /// Entry names of a written archive, in archive order
    pub fn archive_entries(&self, archive: &str) -> Vec<String> {
        let file = File::open(self.project_path(archive))
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", archive, e));
        let mut zip = zip::ZipArchive::new(file).expect("Failed to read zip");
        (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect()
    }

    /// Content of one archive entry
    pub fn archive_entry(&self, archive: &str, name: &str) -> String {
        let file = File::open(self.project_path(archive)).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let mut content = String::new();
        zip.by_name(name)
            .unwrap_or_else(|e| panic!("Missing entry {}: {}", name, e))
            .read_to_string(&mut content)
            .unwrap();
        content
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    config: Option<String>,
    write_serverless: bool,
    write_manifest: bool,
    users_listing: bool,
    extra_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: Some(PACKAGR_JSON.to_string()),
            write_serverless: true,
            write_manifest: true,
            users_listing: true,
            extra_files: Vec::new(),
        }
    }

    /// Replace the default `packagr.json`
    pub fn with_config(mut self, json: &str) -> Self {
        self.config = Some(json.to_string());
        self
    }

    /// Do not write `packagr.json`
    pub fn without_config(mut self) -> Self {
        self.config = None;
        self
    }

    pub fn without_serverless(mut self) -> Self {
        self.write_serverless = false;
        self
    }

    pub fn without_manifest(mut self) -> Self {
        self.write_manifest = false;
        self
    }

    /// Make `npm ls` fail inside the `users` service
    pub fn with_failing_users_npm(mut self) -> Self {
        self.users_listing = false;
        self
    }

    /// Add a file relative to the workspace root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.extra_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let workspace = TempDir::new().expect("Failed to create workspace temp dir");
        let root = canonical(workspace.path());
        let api = root.join("api");
        let users = root.join("users");

        for rel in API_FILES {
            write(&api.join(rel), rel);
        }
        for rel in USERS_FILES {
            write(&users.join(rel), rel);
        }

        if self.write_serverless {
            write(&api.join("serverless.yml"), SERVERLESS_YML);
        }
        if self.write_manifest {
            write(&api.join("package.json"), PACKAGE_JSON);
        }
        if let Some(config) = &self.config {
            write(&api.join("packagr.json"), config);
        }

        write_listing(
            &api,
            &[
                api.clone(),
                api.join("node_modules/uuid"),
                api.join("node_modules/users-service"),
            ],
        );
        if self.users_listing {
            write_listing(
                &users,
                &[
                    users.clone(),
                    users.join("node_modules/axios"),
                    users.join("node_modules/uuid"),
                ],
            );
        }

        for (rel, content) in &self.extra_files {
            write(&root.join(rel), content);
        }

        let npm = fake_npm(&root.join("bin"));

        TestEnv { workspace, npm }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().expect("Failed to canonicalize temp dir")
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn write_listing(scope: &Path, paths: &[PathBuf]) {
    let listing: String = paths
        .iter()
        .map(|p| format!("{}\n", p.display()))
        .collect();
    write(&scope.join(LISTING_FILE), &listing);
}

#[cfg(unix)]
fn fake_npm(bin: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = bin.join("npm");
    write(
        &script,
        &format!("#!/bin/sh\nexec cat {}\n", LISTING_FILE),
    );
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake npm executable");
    script
}

#[cfg(not(unix))]
fn fake_npm(bin: &Path) -> PathBuf {
    // No shell here; a missing program makes every listing empty
    bin.join("no-such-npm")
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
