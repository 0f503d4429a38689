//! Read-only converter registry interface for anchorpath.
//!
//! The path finder never sees how converters are stored. It asks a
//! [`ConverterRegistry`] which anchors a token can be converted through and
//! which connector tokens each anchor's converter links together. Any backend
//! (in-memory map, chain client, database) can answer those questions.
//!
//! [`MemoryRegistry`] is the in-process backend, and [`RegistrySnapshot`]
//! loads one from a TOML file.

pub mod error;
pub mod memory;
pub mod snapshot;

pub use error::RegistryError;
pub use memory::MemoryRegistry;
pub use snapshot::{ConverterEntry, RegistrySnapshot};

use anchorpath_types::{ConverterId, Token};

/// Query surface the path finder reads the converter graph through.
///
/// Answers must stay stable for the duration of a single path query; across
/// queries the registry may change freely.
pub trait ConverterRegistry {
    /// Whether `token` is the anchor (pool token) of some converter.
    fn is_anchor(&self, token: &Token) -> Result<bool, RegistryError>;

    /// Anchors through which `token` is convertible, in registry order.
    ///
    /// Unknown tokens yield an empty list.
    fn convertible_token_anchors(&self, token: &Token) -> Result<Vec<Token>, RegistryError>;

    /// The converter currently owning `anchor`.
    fn owner_of(&self, anchor: &Token) -> Result<ConverterId, RegistryError>;

    /// Number of connector tokens of `converter`.
    fn connector_token_count(&self, converter: &ConverterId) -> Result<usize, RegistryError>;

    /// The connector token at `index` of `converter`.
    fn connector_token_at(
        &self,
        converter: &ConverterId,
        index: usize,
    ) -> Result<Token, RegistryError>;

    /// All connector tokens of `converter`, in index order.
    fn connector_tokens(&self, converter: &ConverterId) -> Result<Vec<Token>, RegistryError> {
        let count = self.connector_token_count(converter)?;
        (0..count)
            .map(|i| self.connector_token_at(converter, i))
            .collect()
    }
}

impl<R: ConverterRegistry + ?Sized> ConverterRegistry for &R {
    fn is_anchor(&self, token: &Token) -> Result<bool, RegistryError> {
        (**self).is_anchor(token)
    }

    fn convertible_token_anchors(&self, token: &Token) -> Result<Vec<Token>, RegistryError> {
        (**self).convertible_token_anchors(token)
    }

    fn owner_of(&self, anchor: &Token) -> Result<ConverterId, RegistryError> {
        (**self).owner_of(anchor)
    }

    fn connector_token_count(&self, converter: &ConverterId) -> Result<usize, RegistryError> {
        (**self).connector_token_count(converter)
    }

    fn connector_token_at(
        &self,
        converter: &ConverterId,
        index: usize,
    ) -> Result<Token, RegistryError> {
        (**self).connector_token_at(converter, index)
    }
}
