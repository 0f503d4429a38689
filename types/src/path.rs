//! Conversion paths.
//!
//! A path alternates between plain tokens and anchors:
//!
//! ```text
//! token → anchor → token → anchor → … → token
//! ```
//!
//! Every hop `token, anchor, token` is one conversion through the converter
//! owning `anchor`. Each element carries its [`Role`] so that code comparing
//! positions never has to reason about index parity.

use serde::{Deserialize, Serialize};

use crate::Token;

/// Position kind inside a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A token being converted from or to.
    Token,
    /// The anchor of the converter used for the hop.
    Anchor,
}

impl Role {
    /// Role of the element at `index` in a well-formed path.
    pub fn at(index: usize) -> Self {
        if index % 2 == 0 {
            Role::Token
        } else {
            Role::Anchor
        }
    }
}

/// One element of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub token: Token,
    pub role: Role,
}

/// An ordered conversion route. Empty means "no route".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// The trivial path: the query token already is its destination.
    pub fn single(token: Token) -> Self {
        Self::from_tokens([token])
    }

    /// Build a path from plain tokens, assigning alternating roles from a
    /// leading [`Role::Token`].
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let steps = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| PathStep {
                token,
                role: Role::at(i),
            })
            .collect();
        Self { steps }
    }

    /// Build a path from steps that already carry their roles.
    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn first(&self) -> Option<Token> {
        self.steps.first().map(|s| s.token)
    }

    pub fn last(&self) -> Option<Token> {
        self.steps.last().map(|s| s.token)
    }

    /// The bare token sequence.
    pub fn tokens(&self) -> Vec<Token> {
        self.steps.iter().map(|s| s.token).collect()
    }

    /// Anchors traversed, in order.
    pub fn anchors(&self) -> impl Iterator<Item = Token> + '_ {
        self.steps
            .iter()
            .filter(|s| s.role == Role::Anchor)
            .map(|s| s.token)
    }

    /// Number of conversions the path describes.
    pub fn hop_count(&self) -> usize {
        self.steps.len() / 2
    }

    /// Whether roles start at [`Role::Token`], alternate, and the path ends on
    /// a token. The empty path is well-formed.
    pub fn is_well_formed(&self) -> bool {
        self.steps.is_empty()
            || (self.steps.len() % 2 == 1
                && self
                    .steps
                    .iter()
                    .enumerate()
                    .all(|(i, s)| s.role == Role::at(i)))
    }

    /// The same route walked the other way.
    pub fn reversed(&self) -> Self {
        let mut steps = self.steps.clone();
        steps.reverse();
        Self { steps }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
