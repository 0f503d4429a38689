use anchorpath_types::ConverterId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate entry: {0}")]
    Duplicate(String),

    #[error("invalid converter: {0}")]
    InvalidConverter(String),

    #[error("connector index {index} out of range for converter {converter} ({count} connectors)")]
    IndexOutOfRange {
        converter: ConverterId,
        index: usize,
        count: usize,
    },

    #[error("registry backend error: {0}")]
    Backend(String),

    #[error("invalid registry snapshot: {0}")]
    Snapshot(String),
}
