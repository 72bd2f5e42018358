//! Validated, cyclically ordered move set.

use crate::error::ValidationError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

/// Ordered, duplicate-free list of move names with odd length >= 3
///
/// The order is the cycle: each move beats the `len / 2` moves before it
/// (wrapping around) and loses to the `len / 2` moves after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Smallest playable move set size
    pub const MIN_LEN: usize = 3;

    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        match moves.len() {
            0 => return Err(ValidationError::Empty),
            n if n < Self::MIN_LEN => return Err(ValidationError::TooFew(n)),
            n if n % 2 == 0 => return Err(ValidationError::EvenLength(n)),
            _ => {}
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::Duplicate(name.clone()));
            }
        }

        Ok(Self(moves))
    }

    /// Zero-based position of `name` in the cycle
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Whether `name` is a playable move
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Move names in cycle order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for MoveSet {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = ValidationError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
