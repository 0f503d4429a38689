//! Path-finding errors.

use anchorpath_registry::RegistryError;
use thiserror::Error;

/// Failures while answering a path query.
///
/// An unreachable token is not an error: queries return an empty path.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("registry query failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("anchor token must be a non-zero address")]
    InvalidAnchor,
}
