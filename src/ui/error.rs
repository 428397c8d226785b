use packagr::PackagrError;

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::output::TAG;

/// One-line diagnostic for a fatal error
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PackagrError>() {
        Some(packagr) => format!("{} {}\n", TAG, packagr),
        None => format!("{} {:#}\n", TAG, err),
    }
}

fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PackagrError>() {
        Some(packagr) => packagr.to_string(),
        None => format!("{:#}", err),
    }
}

/// Report a fatal error. The tagged line always goes to stderr; JSON mode
/// adds an `error` event on stdout.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": error_message(err),
        });
        let _ = crate::ui::json::emit(output);
    } else if is_github_actions() {
        let file = err
            .downcast_ref::<PackagrError>()
            .and_then(PackagrError::file)
            .map(|p| p.to_string_lossy().into_owned());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &error_message(err),
                file.as_deref(),
                None,
            )
        );
    }

    eprint!("{}", format_error(err));
}
