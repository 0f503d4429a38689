//! Conversion path finding over a converter registry.
//!
//! Every route runs through a single anchor token:
//!
//! ```text
//! source → … → anchor token → … → target
//! ```
//!
//! [`find_path_to_anchor`] walks the registry depth-first from one token to
//! the anchor token, [`merge_paths`] splices the source and target routes into
//! one and drops detours, and [`PathFinder`] ties both to a configured anchor.

pub mod config;
pub mod discover;
pub mod error;
pub mod finder;
pub mod merge;

pub use config::FinderConfig;
pub use discover::find_path_to_anchor;
pub use error::PathError;
pub use finder::{find_path, PathFinder};
pub use merge::{collapse_loops, merge_paths};
