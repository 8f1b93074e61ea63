//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PropertyError;

/// Map loader errors to a string for CLI output.
pub fn map_error(e: &PropertyError) -> String {
    if e.is_unsupported() {
        format!(
            "{}\nBundled defaults are required; check the --resources directory.",
            e
        )
    } else {
        e.to_string()
    }
}
