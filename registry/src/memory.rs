//! In-memory converter registry.

use std::collections::HashMap;

use anchorpath_types::{ConverterId, Token};
use tracing::debug;

use crate::{ConverterRegistry, RegistryError};

/// A converter registry held entirely in memory.
///
/// Registry order is insertion order: a token's anchors are listed in the
/// order their converters were added.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    /// Anchor → owning converter.
    owners: HashMap<Token, ConverterId>,
    /// Converter → connector tokens, in index order.
    connectors: HashMap<ConverterId, Vec<Token>>,
    /// Convertible token → anchors it can be converted through.
    token_anchors: HashMap<Token, Vec<Token>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `converter` as the owner of `anchor`, linking `connectors`.
    ///
    /// The anchor itself and every connector become convertible through
    /// `anchor`.
    pub fn add_converter(
        &mut self,
        converter: ConverterId,
        anchor: Token,
        connectors: Vec<Token>,
    ) -> Result<(), RegistryError> {
        if anchor.is_zero() {
            return Err(RegistryError::InvalidConverter(format!(
                "converter {converter} has a zero anchor"
            )));
        }
        if connectors.is_empty() {
            return Err(RegistryError::InvalidConverter(format!(
                "converter {converter} has no connector tokens"
            )));
        }
        if connectors.iter().any(Token::is_zero) {
            return Err(RegistryError::InvalidConverter(format!(
                "converter {converter} has a zero connector token"
            )));
        }
        if self.owners.contains_key(&anchor) {
            return Err(RegistryError::Duplicate(format!("anchor {anchor}")));
        }
        if self.connectors.contains_key(&converter) {
            return Err(RegistryError::Duplicate(format!("converter {converter}")));
        }

        self.link(anchor, anchor);
        for token in &connectors {
            self.link(*token, anchor);
        }
        debug!(%converter, %anchor, connectors = connectors.len(), "converter added");
        self.owners.insert(anchor, converter);
        self.connectors.insert(converter, connectors);
        Ok(())
    }

    /// Remove the converter owning `anchor` and every link through it.
    pub fn remove_converter(&mut self, anchor: &Token) -> Result<ConverterId, RegistryError> {
        let converter = self
            .owners
            .remove(anchor)
            .ok_or_else(|| RegistryError::NotFound(format!("anchor {anchor}")))?;
        self.connectors.remove(&converter);
        self.token_anchors.retain(|_, anchors| {
            anchors.retain(|a| a != anchor);
            !anchors.is_empty()
        });
        debug!(%converter, %anchor, "converter removed");
        Ok(converter)
    }

    /// Number of registered converters.
    pub fn converter_count(&self) -> usize {
        self.owners.len()
    }

    fn link(&mut self, token: Token, anchor: Token) {
        let anchors = self.token_anchors.entry(token).or_default();
        if !anchors.contains(&anchor) {
            anchors.push(anchor);
        }
    }

    fn connectors_of(&self, converter: &ConverterId) -> Result<&[Token], RegistryError> {
        self.connectors
            .get(converter)
            .map(Vec::as_slice)
            .ok_or_else(|| RegistryError::NotFound(format!("converter {converter}")))
    }
}

impl ConverterRegistry for MemoryRegistry {
    fn is_anchor(&self, token: &Token) -> Result<bool, RegistryError> {
        Ok(self.owners.contains_key(token))
    }

    fn convertible_token_anchors(&self, token: &Token) -> Result<Vec<Token>, RegistryError> {
        Ok(self.token_anchors.get(token).cloned().unwrap_or_default())
    }

    fn owner_of(&self, anchor: &Token) -> Result<ConverterId, RegistryError> {
        self.owners
            .get(anchor)
            .copied()
            .ok_or_else(|| RegistryError::NotFound(format!("anchor {anchor}")))
    }

    fn connector_token_count(&self, converter: &ConverterId) -> Result<usize, RegistryError> {
        self.connectors_of(converter).map(<[Token]>::len)
    }

    fn connector_token_at(
        &self,
        converter: &ConverterId,
        index: usize,
    ) -> Result<Token, RegistryError> {
        let connectors = self.connectors_of(converter)?;
        connectors
            .get(index)
            .copied()
            .ok_or(RegistryError::IndexOutOfRange {
                converter: *converter,
                index,
                count: connectors.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(id: u64) -> Token {
        Token::from_low_u64(id)
    }

    fn c(id: u64) -> ConverterId {
        ConverterId::from_low_u64(id)
    }

    #[test]
    fn anchors_are_listed_in_insertion_order() {
        let mut registry = MemoryRegistry::new();
        registry.add_converter(c(1), t(10), vec![t(1), t(2)]).unwrap();
        registry.add_converter(c(2), t(20), vec![t(1), t(3)]).unwrap();

        assert_eq!(
            registry.convertible_token_anchors(&t(1)).unwrap(),
            vec![t(10), t(20)]
        );
        assert_eq!(registry.convertible_token_anchors(&t(10)).unwrap(), vec![t(10)]);
        assert!(registry.is_anchor(&t(20)).unwrap());
        assert!(!registry.is_anchor(&t(1)).unwrap());
    }

    #[test]
    fn connectors_are_indexed_in_order() {
        let mut registry = MemoryRegistry::new();
        registry.add_converter(c(1), t(10), vec![t(1), t(2)]).unwrap();

        let owner = registry.owner_of(&t(10)).unwrap();
        assert_eq!(owner, c(1));
        assert_eq!(registry.connector_token_count(&owner).unwrap(), 2);
        assert_eq!(registry.connector_token_at(&owner, 1).unwrap(), t(2));
        assert_eq!(registry.connector_tokens(&owner).unwrap(), vec![t(1), t(2)]);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut registry = MemoryRegistry::new();
        registry.add_converter(c(1), t(10), vec![t(1)]).unwrap();
        let err = registry.connector_token_at(&c(1), 5).unwrap_err();
        assert_eq!(
            err,
            RegistryError::IndexOutOfRange {
                converter: c(1),
                index: 5,
                count: 1
            }
        );
    }

    #[test]
    fn unknown_token_has_no_anchors() {
        let registry = MemoryRegistry::new();
        assert!(registry.convertible_token_anchors(&t(99)).unwrap().is_empty());
        assert!(matches!(
            registry.owner_of(&t(99)),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_anchor_and_converter_are_rejected() {
        let mut registry = MemoryRegistry::new();
        registry.add_converter(c(1), t(10), vec![t(1)]).unwrap();
        assert!(matches!(
            registry.add_converter(c(2), t(10), vec![t(2)]),
            Err(RegistryError::Duplicate(_))
        ));
        assert!(matches!(
            registry.add_converter(c(1), t(20), vec![t(2)]),
            Err(RegistryError::Duplicate(_))
        ));
        assert_eq!(registry.converter_count(), 1);
    }

    #[test]
    fn empty_or_zero_connectors_are_rejected() {
        let mut registry = MemoryRegistry::new();
        assert!(matches!(
            registry.add_converter(c(1), t(10), vec![]),
            Err(RegistryError::InvalidConverter(_))
        ));
        assert!(matches!(
            registry.add_converter(c(1), t(10), vec![Token::ZERO]),
            Err(RegistryError::InvalidConverter(_))
        ));
    }

    #[test]
    fn remove_converter_unlinks_tokens() {
        let mut registry = MemoryRegistry::new();
        registry.add_converter(c(1), t(10), vec![t(1), t(2)]).unwrap();
        registry.add_converter(c(2), t(20), vec![t(1), t(3)]).unwrap();

        assert_eq!(registry.remove_converter(&t(10)).unwrap(), c(1));
        assert_eq!(registry.convertible_token_anchors(&t(1)).unwrap(), vec![t(20)]);
        assert!(registry.convertible_token_anchors(&t(2)).unwrap().is_empty());
        assert!(!registry.is_anchor(&t(10)).unwrap());
        assert!(matches!(
            registry.remove_converter(&t(10)),
            Err(RegistryError::NotFound(_))
        ));
    }
}
