//! Glob matcher backed by a directory walk
//!
//! A pattern is split into its literal base (leading segments without glob
//! metacharacters, `..` included) and the glob remainder. The base is walked
//! with `ignore::WalkBuilder` and every file below it is tested against the
//! remainder with `globset`.
//!
//! Matching follows node-glob defaults: `*` stops at `/`, `**` crosses
//! directories, and dot-entries below the base are not matched.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

use crate::domain::ports::FileMatcher;
use crate::domain::value_objects::to_slash;

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '!'];

/// Walk-based implementation of the `FileMatcher` port
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkGlobMatcher;

impl WalkGlobMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Pattern split into the directory to walk and the glob applied below it
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitPattern {
    base: String,
    glob: Option<String>,
}

fn split_pattern(pattern: &str) -> SplitPattern {
    let segments: Vec<&str> = pattern
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    match segments.iter().position(|s| s.contains(GLOB_META)) {
        Some(idx) => SplitPattern {
            base: segments[..idx].join("/"),
            glob: Some(segments[idx..].join("/")),
        },
        None => SplitPattern {
            base: segments.join("/"),
            glob: None,
        },
    }
}

fn compile(glob: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(glob)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

fn join_base(base: &str, relative: &str) -> String {
    if base.is_empty() {
        relative.to_string()
    } else {
        format!("{}/{}", base, relative)
    }
}

impl FileMatcher for WalkGlobMatcher {
    fn matches(&self, root: &Path, pattern: &str) -> Vec<String> {
        let split = split_pattern(pattern);
        let walk_root = root.join(&split.base);

        let glob = match split.glob {
            Some(glob) => glob,
            None => {
                // Literal pattern: the file itself or nothing
                return if walk_root.is_file() {
                    vec![split.base]
                } else {
                    Vec::new()
                };
            }
        };

        let matcher = match compile(&glob) {
            Ok(matcher) => matcher,
            Err(err) => {
                tracing::warn!(pattern = %pattern, error = %err, "invalid include pattern, skipping");
                return Vec::new();
            }
        };

        if !walk_root.is_dir() {
            return Vec::new();
        }

        let walker = WalkBuilder::new(&walk_root)
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .build();

        let mut matched = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(pattern = %pattern, error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                Some(ft) if ft.is_symlink() => entry.path().is_file(),
                _ => false,
            };
            if !is_file {
                continue;
            }

            let relative = match entry.path().strip_prefix(&walk_root) {
                Ok(relative) => to_slash(relative),
                Err(_) => continue,
            };
            if matcher.is_match(&relative) {
                matched.push(join_base(&split.base, &relative));
            }
        }

        matched.sort();
        matched
    }
}
