//! Registry snapshots loaded from TOML.
//!
//! ```toml
//! anchor_token = "BNT"
//!
//! [symbols]
//! BNT = "0x1f573d6fb3f13d689ff844b4ce37794d79a7ff1c"
//! ETH = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
//! ETHBNT = "0xb1cd6e4153b2a390cf00a6556b0fc1458c4a5533"
//!
//! [[converters]]
//! address = "0x8ba4e2d64b2c3bc1c0cc0b6b7b2d4b47ba8c1d9e"
//! anchor = "ETHBNT"
//! connectors = ["ETH", "BNT"]
//! ```
//!
//! Token fields accept either a symbol from `[symbols]` or a raw address.

use std::collections::BTreeMap;
use std::path::Path as FsPath;

use anchorpath_types::{ConverterId, Token};
use serde::{Deserialize, Serialize};

use crate::{MemoryRegistry, RegistryError};

/// One converter as written in a snapshot file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConverterEntry {
    /// Converter address.
    pub address: ConverterId,
    /// Anchor owned by the converter (symbol or address).
    pub anchor: String,
    /// Connector tokens in index order (symbols or addresses).
    pub connectors: Vec<String>,
}

/// A registry serialized to disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Anchor token paths route through, if the snapshot names one.
    #[serde(default)]
    pub anchor_token: Option<String>,

    /// Human-readable labels for token addresses.
    #[serde(default)]
    pub symbols: BTreeMap<String, Token>,

    /// Converters in registry order.
    #[serde(default)]
    pub converters: Vec<ConverterEntry>,
}

impl RegistrySnapshot {
    /// Load a snapshot from a TOML file.
    pub fn from_toml_file(path: impl AsRef<FsPath>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Snapshot(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse a snapshot from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RegistryError> {
        toml::from_str(s).map_err(|e| RegistryError::Snapshot(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, RegistryError> {
        toml::to_string_pretty(self).map_err(|e| RegistryError::Snapshot(e.to_string()))
    }

    /// Resolve a symbol or a raw address to a token.
    pub fn resolve(&self, name: &str) -> Result<Token, RegistryError> {
        if let Some(token) = self.symbols.get(name) {
            return Ok(*token);
        }
        name.parse()
            .map_err(|_| RegistryError::NotFound(format!("unknown token or symbol {name}")))
    }

    /// The symbol registered for `token`, if any.
    pub fn symbol_of(&self, token: &Token) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(name, _)| name.as_str())
    }

    /// The snapshot's anchor token, resolved.
    pub fn anchor(&self) -> Result<Option<Token>, RegistryError> {
        self.anchor_token
            .as_deref()
            .map(|name| self.resolve(name))
            .transpose()
    }

    /// Build an in-memory registry holding every converter of the snapshot.
    pub fn into_registry(&self) -> Result<MemoryRegistry, RegistryError> {
        let mut registry = MemoryRegistry::new();
        for entry in &self.converters {
            let anchor = self.resolve(&entry.anchor)?;
            let connectors = entry
                .connectors
                .iter()
                .map(|name| self.resolve(name))
                .collect::<Result<Vec<_>, _>>()?;
            registry.add_converter(entry.address, anchor, connectors)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConverterRegistry;

    const SNAPSHOT: &str = r#"
        anchor_token = "BNT"

        [symbols]
        BNT = "0x0000000000000000000000000000000000000001"
        ETH = "0x0000000000000000000000000000000000000002"
        ETHBNT = "0x0000000000000000000000000000000000000003"

        [[converters]]
        address = "0x00000000000000000000000000000000000000c1"
        anchor = "ETHBNT"
        connectors = ["ETH", "BNT"]
    "#;

    #[test]
    fn builds_registry_from_symbols() {
        let snapshot = RegistrySnapshot::from_toml_str(SNAPSHOT).expect("should parse");
        let registry = snapshot.into_registry().expect("should build");

        let ethbnt = snapshot.resolve("ETHBNT").unwrap();
        let eth = snapshot.resolve("ETH").unwrap();
        assert!(registry.is_anchor(&ethbnt).unwrap());
        assert_eq!(registry.convertible_token_anchors(&eth).unwrap(), vec![ethbnt]);
        assert_eq!(snapshot.anchor().unwrap(), Some(Token::from_low_u64(1)));
        assert_eq!(snapshot.symbol_of(&eth), Some("ETH"));
    }

    #[test]
    fn raw_addresses_resolve_without_symbols() {
        let snapshot = RegistrySnapshot::default();
        let token = snapshot
            .resolve("0x00000000000000000000000000000000000000ff")
            .unwrap();
        assert_eq!(token, Token::from_low_u64(0xff));
        assert!(matches!(
            snapshot.resolve("DAI"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_connector_symbol_fails_build() {
        let toml = r#"
            [[converters]]
            address = "0x00000000000000000000000000000000000000c1"
            anchor = "0x0000000000000000000000000000000000000003"
            connectors = ["DAI"]
        "#;
        let snapshot = RegistrySnapshot::from_toml_str(toml).unwrap();
        assert!(snapshot.into_registry().is_err());
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let snapshot = RegistrySnapshot::from_toml_str("").expect("empty toml is valid");
        assert!(snapshot.anchor().unwrap().is_none());
        assert_eq!(snapshot.into_registry().unwrap().converter_count(), 0);
    }

    #[test]
    fn round_trips_through_toml() {
        let snapshot = RegistrySnapshot::from_toml_str(SNAPSHOT).unwrap();
        let text = snapshot.to_toml_string().unwrap();
        let parsed = RegistrySnapshot::from_toml_str(&text).unwrap();
        assert_eq!(parsed.converters.len(), 1);
        assert_eq!(parsed.symbols, snapshot.symbols);
    }

    #[test]
    fn missing_file_returns_snapshot_error() {
        let err = RegistrySnapshot::from_toml_file("/nonexistent/registry.toml").unwrap_err();
        assert!(matches!(err, RegistryError::Snapshot(_)));
    }
}
