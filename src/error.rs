use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a meal catalog.
///
/// The planning engine itself never fails; an empty candidate set is an
/// empty slot, not an error. Only getting the catalog into memory can go wrong.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found at: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode catalog CSV at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to decode catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format for {0:?} (expected .csv or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid value for '{field}' in meal '{meal_id}': {reason}")]
    InvalidField {
        meal_id: String,
        field: &'static str,
        reason: String,
    },

    #[error("duplicate meal id '{0}' in catalog")]
    DuplicateId(String),

    #[error("catalog contains no meals")]
    Empty,
}

/// Errors raised when a quick-log query does not pick out exactly one preset.
#[derive(Debug, Error, PartialEq)]
pub enum PresetError {
    #[error("no outside-food preset matches '{0}'")]
    NoMatch(String),

    #[error("'{query}' matches several presets: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}
