//! GitHub Actions workflow annotations
//!
//! When running under Actions, fatal errors and config warnings are also
//! printed as `::error`/`::warning` commands so they show up on the run
//! summary and, when a file is known, inline on the diff.

use packagr::config::ConfigWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn is_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = vec![format!("title={}", escape_property("Packagr"))];
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }

    format!("::{} {}::{}", level_str, props.join(","), escape_data(message))
}

pub fn warning_annotation(warning: &ConfigWarning) -> String {
    github_actions_annotation(
        AnnotationLevel::Warning,
        &warning.to_string(),
        Some(&warning.file.to_string_lossy()),
        warning.line,
    )
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn annotation_escapes_newlines() {
        let rendered =
            github_actions_annotation(AnnotationLevel::Error, "Line1\nLine2", None, None);
        assert_eq!(rendered, "::error title=Packagr::Line1%0ALine2");
    }

    #[test]
    fn warning_annotation_points_at_file_and_line() {
        let warning = ConfigWarning {
            key: "microservice".to_string(),
            path: "microservice".to_string(),
            file: PathBuf::from("api/packagr.json"),
            line: Some(3),
            suggestion: Some("microservices".to_string()),
        };

        let rendered = warning_annotation(&warning);
        assert!(rendered.starts_with("::warning title=Packagr,file=api/packagr.json,line=3::"));
        assert!(rendered.ends_with("(did you mean 'microservices'?)"));
    }

    #[test]
    fn property_values_escape_separators() {
        assert_eq!(escape_property("C:\\a,b"), "C%3A\\a%2Cb");
    }
}
