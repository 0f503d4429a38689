//! Nullable registry: an in-memory converter registry that records queries.

use std::collections::HashMap;
use std::sync::Mutex;

use anchorpath_registry::{ConverterRegistry, MemoryRegistry, RegistryError};
use anchorpath_types::{ConverterId, Token};

/// Which registry query was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    IsAnchor,
    ConvertibleTokenAnchors,
    OwnerOf,
    ConnectorTokenCount,
    ConnectorTokenAt,
}

/// A converter registry for tests.
///
/// Wraps a [`MemoryRegistry`], logs every query it answers, and can be told
/// to fail lookups of particular anchors.
pub struct NullRegistry {
    inner: MemoryRegistry,
    log: Mutex<Vec<(Query, Token)>>,
    failing_anchors: Mutex<HashMap<Token, RegistryError>>,
    converter_anchors: HashMap<ConverterId, Token>,
}

impl NullRegistry {
    pub fn new() -> Self {
        Self {
            inner: MemoryRegistry::new(),
            log: Mutex::new(Vec::new()),
            failing_anchors: Mutex::new(HashMap::new()),
            converter_anchors: HashMap::new(),
        }
    }

    /// Add a converter owning `anchor`, assigning it a fresh converter id.
    ///
    /// # Panics
    /// Panics if the registry rejects the converter.
    pub fn with_converter(mut self, anchor: Token, connectors: &[Token]) -> Self {
        let converter = ConverterId::from_low_u64(0xc000 + self.converter_anchors.len() as u64);
        self.converter_anchors.insert(converter, anchor);
        self.inner
            .add_converter(converter, anchor, connectors.to_vec())
            .unwrap();
        self
    }

    /// Make `owner_of(anchor)` fail with `error` from now on.
    pub fn fail_owner_of(&self, anchor: Token, error: RegistryError) {
        self.failing_anchors.lock().unwrap().insert(anchor, error);
    }

    /// Every query answered so far with the token or anchor it was about.
    ///
    /// Converter-level queries are logged against the anchor the converter
    /// owns.
    pub fn queries(&self) -> Vec<(Query, Token)> {
        self.log.lock().unwrap().clone()
    }

    /// Number of queries of one kind answered so far.
    pub fn query_count(&self, kind: Query) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(q, _)| *q == kind)
            .count()
    }

    /// Anchors whose owner was looked up, in lookup order.
    pub fn resolved_anchors(&self) -> Vec<Token> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(q, _)| *q == Query::OwnerOf)
            .map(|(_, t)| *t)
            .collect()
    }

    pub fn clear_log(&self) {
        self.log.lock().unwrap().clear();
    }

    fn record(&self, query: Query, subject: Token) {
        self.log.lock().unwrap().push((query, subject));
    }

    fn anchor_of(&self, converter: &ConverterId) -> Token {
        self.converter_anchors
            .get(converter)
            .copied()
            .unwrap_or(Token::ZERO)
    }
}

impl Default for NullRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry for NullRegistry {
    fn is_anchor(&self, token: &Token) -> Result<bool, RegistryError> {
        self.record(Query::IsAnchor, *token);
        self.inner.is_anchor(token)
    }

    fn convertible_token_anchors(&self, token: &Token) -> Result<Vec<Token>, RegistryError> {
        self.record(Query::ConvertibleTokenAnchors, *token);
        self.inner.convertible_token_anchors(token)
    }

    fn owner_of(&self, anchor: &Token) -> Result<ConverterId, RegistryError> {
        self.record(Query::OwnerOf, *anchor);
        if let Some(error) = self.failing_anchors.lock().unwrap().get(anchor) {
            return Err(error.clone());
        }
        self.inner.owner_of(anchor)
    }

    fn connector_token_count(&self, converter: &ConverterId) -> Result<usize, RegistryError> {
        let anchor = self.anchor_of(converter);
        self.record(Query::ConnectorTokenCount, anchor);
        self.inner.connector_token_count(converter)
    }

    fn connector_token_at(
        &self,
        converter: &ConverterId,
        index: usize,
    ) -> Result<Token, RegistryError> {
        let anchor = self.anchor_of(converter);
        self.record(Query::ConnectorTokenAt, anchor);
        self.inner.connector_token_at(converter, index)
    }
}
