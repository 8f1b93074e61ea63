//! Error types for layered property loading.

use thiserror::Error;

/// Errors surfaced by the property loader.
///
/// Missing local or global overrides never show up here; they are absorbed
/// by the loader and only traced.
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Unsupported operation: bundled defaults not found ({resource})")]
    MissingDefaults { resource: String },

    #[error("Unsupported operation: bundled defaults unreadable ({resource}): {source}")]
    UnreadableDefaults {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for '{key}': {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl PropertyError {
    /// True for the fatal "bundled defaults unavailable" conditions.
    ///
    /// These indicate a packaging defect rather than a runtime condition.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            PropertyError::MissingDefaults { .. } | PropertyError::UnreadableDefaults { .. }
        )
    }
}
