//! Source→target path queries routed through a fixed anchor token.

use anchorpath_registry::ConverterRegistry;
use anchorpath_types::{Path, Token};
use tracing::debug;

use crate::discover::find_path_to_anchor;
use crate::merge::merge_paths;
use crate::{FinderConfig, PathError};

/// Find a conversion route from `source` to `target` through `anchor_token`.
///
/// Both tokens are routed to the anchor independently and the two routes are
/// merged. The result is empty when either token cannot reach the anchor.
pub fn find_path<R: ConverterRegistry>(
    source: Token,
    target: Token,
    anchor_token: Token,
    registry: &R,
    max_depth: usize,
) -> Result<Path, PathError> {
    let source_path = find_path_to_anchor(source, anchor_token, registry, max_depth)?;
    let target_path = find_path_to_anchor(target, anchor_token, registry, max_depth)?;
    Ok(merge_paths(&source_path, &target_path))
}

/// Answers path queries against one registry and one anchor token.
///
/// The anchor is fixed at construction; swapping it means building a new
/// finder.
pub struct PathFinder<R> {
    registry: R,
    anchor_token: Token,
    config: FinderConfig,
}

impl<R: ConverterRegistry> PathFinder<R> {
    pub fn new(registry: R, anchor_token: Token, config: FinderConfig) -> Result<Self, PathError> {
        if anchor_token.is_zero() {
            return Err(PathError::InvalidAnchor);
        }
        Ok(Self {
            registry,
            anchor_token,
            config,
        })
    }

    /// The route from `source` to `target`, or the empty path if none exists.
    pub fn find_path(&self, source: Token, target: Token) -> Result<Path, PathError> {
        let path = find_path(
            source,
            target,
            self.anchor_token,
            &self.registry,
            self.config.max_depth,
        )?;
        debug!(
            %source,
            %target,
            anchor = %self.anchor_token,
            hops = path.hop_count(),
            found = !path.is_empty(),
            "path query"
        );
        Ok(path)
    }

    /// The route from `token` to the anchor token.
    pub fn path_to_anchor(&self, token: Token) -> Result<Path, PathError> {
        find_path_to_anchor(token, self.anchor_token, &self.registry, self.config.max_depth)
    }

    pub fn anchor_token(&self) -> Token {
        self.anchor_token
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }
}
