//! Route discovery from a token to the anchor token.
//!
//! The search is depth-first and strictly follows registry order:
//!
//! ```text
//! token ─┬─ anchor₁ ─┬─ connector₁ → search(connector₁)
//!        │           └─ connector₂ → search(connector₂)
//!        └─ anchor₂ ─── …
//! ```
//!
//! The first route that reaches the anchor token wins, even if a shorter one
//! exists further along in registry order.
//!
//! The search runs on an explicit stack and never revisits a token already on
//! it, so registries whose converters form cycles still terminate. Each token
//! remembers the largest depth budget it was expanded with. A token whose
//! subtree failed without touching the depth bound is never expanded again.
//! A token cut short by the bound is expanded again only when reached with a
//! larger budget. This returns the same route a naive recursive search with
//! the same bound would.

use std::collections::HashMap;

use anchorpath_registry::ConverterRegistry;
use anchorpath_types::{Path, Token};
use tracing::trace;

use crate::PathError;

/// One token being expanded on the search stack.
struct Frame {
    token: Token,
    /// Candidate anchors, in registry order.
    anchors: Vec<Token>,
    next_anchor: usize,
    /// Anchor whose connectors are being walked.
    current: Option<Token>,
    connectors: Vec<Token>,
    next_connector: usize,
    /// Some route below this token was cut off by the depth bound.
    pruned: bool,
}

impl Frame {
    fn open<R: ConverterRegistry>(token: Token, registry: &R) -> Result<Self, PathError> {
        let anchors = if registry.is_anchor(&token)? {
            vec![token]
        } else {
            registry.convertible_token_anchors(&token)?
        };
        trace!(%token, anchors = anchors.len(), "expanding token");
        Ok(Self {
            token,
            anchors,
            next_anchor: 0,
            current: None,
            connectors: Vec::new(),
            next_connector: 0,
            pruned: false,
        })
    }

    /// The next connector token to try, moving on to the following anchor's
    /// converter once the current one is exhausted.
    fn advance<R: ConverterRegistry>(&mut self, registry: &R) -> Result<Option<Token>, PathError> {
        loop {
            if let Some(&connector) = self.connectors.get(self.next_connector) {
                self.next_connector += 1;
                return Ok(Some(connector));
            }
            let Some(&anchor) = self.anchors.get(self.next_anchor) else {
                return Ok(None);
            };
            self.next_anchor += 1;
            let converter = registry.owner_of(&anchor)?;
            self.current = Some(anchor);
            self.connectors = registry.connector_tokens(&converter)?;
            self.next_connector = 0;
        }
    }
}

/// Find the first route, in registry order, from `token` to `anchor_token`.
///
/// Returns `[token]` when `token == anchor_token` and the empty path when no
/// route of at most `max_depth` conversions exists.
pub fn find_path_to_anchor<R: ConverterRegistry>(
    token: Token,
    anchor_token: Token,
    registry: &R,
    max_depth: usize,
) -> Result<Path, PathError> {
    if token == anchor_token {
        return Ok(Path::single(token));
    }
    if max_depth == 0 {
        return Ok(Path::empty());
    }

    // Largest remaining budget each token was expanded with.
    let mut budgets: HashMap<Token, usize> = HashMap::new();
    let mut stack = vec![Frame::open(token, registry)?];

    while let Some(frame) = stack.last_mut() {
        let origin = frame.token;
        let Some(next) = frame.advance(registry)? else {
            let pruned = frame.pruned;
            stack.pop();
            if pruned {
                mark_pruned(&mut stack);
            } else {
                trace!(token = %origin, "no route through this token");
                budgets.insert(origin, EXHAUSTED);
            }
            continue;
        };

        if next == origin {
            continue;
        }
        if next == anchor_token {
            return Ok(route(&stack, anchor_token));
        }
        if stack.iter().any(|f| f.token == next) {
            continue;
        }
        if stack.len() >= max_depth {
            trace!(token = %next, max_depth, "depth bound reached");
            mark_pruned(&mut stack);
            continue;
        }

        let remaining = max_depth - stack.len();
        match budgets.get(&next) {
            Some(&EXHAUSTED) => continue,
            Some(&tried) if tried >= remaining => {
                mark_pruned(&mut stack);
                continue;
            }
            _ => {}
        }

        budgets.insert(next, remaining);
        stack.push(Frame::open(next, registry)?);
    }

    Ok(Path::empty())
}

/// Budget marker for a token that cannot reach the anchor at any depth.
const EXHAUSTED: usize = usize::MAX;

fn mark_pruned(stack: &mut [Frame]) {
    if let Some(frame) = stack.last_mut() {
        frame.pruned = true;
    }
}

/// `[token₀, anchor₀, token₁, anchor₁, …, anchor_token]` from the live stack.
fn route(stack: &[Frame], anchor_token: Token) -> Path {
    let mut tokens = Vec::with_capacity(stack.len() * 2 + 1);
    for frame in stack {
        tokens.push(frame.token);
        if let Some(anchor) = frame.current {
            tokens.push(anchor);
        }
    }
    tokens.push(anchor_token);
    Path::from_tokens(tokens)
}
