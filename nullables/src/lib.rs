//! Nullable infrastructure for deterministic testing.
//!
//! The path finder reads its graph through the `ConverterRegistry` trait.
//! This crate provides a registry that:
//! - Answers from a fixed in-memory fixture
//! - Records every query so tests can assert on exploration order
//! - Can be told to fail specific lookups
//!
//! Usage: build a fixture with [`NullRegistry::with_converter`] and hand it
//! to the finder in place of a real backend.

pub mod registry;

pub use registry::{NullRegistry, Query};
