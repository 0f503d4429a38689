//! Fundamental types for anchorpath.
//!
//! This crate defines the values shared across every other crate in the
//! workspace: token and converter addresses, and the role-tagged conversion
//! path produced by the finder.

pub mod address;
pub mod converter;
pub mod error;
pub mod path;
pub mod token;

pub use converter::ConverterId;
pub use error::TypeError;
pub use path::{Path, PathStep, Role};
pub use token::Token;
