//! Cyclic outcome rules for generalized rock-paper-scissors.

use super::move_set::MoveSet;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round, from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Short label used in the help table
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same round seen from the other side
    pub fn inverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Announcement line printed after a round
    pub fn announcement(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "Computer wins!",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decide the round for `player_move` against `opponent_move`
///
/// With `half = len / 2`, the player wins when their move sits 1..=half
/// steps after the opponent's move in the cycle, and loses otherwise.
pub fn determine_outcome(
    player_move: &str,
    opponent_move: &str,
    moves: &MoveSet,
) -> Result<Outcome> {
    let p = moves
        .index_of(player_move)
        .ok_or_else(|| GameError::MoveNotInSet(player_move.to_string()))?;
    let c = moves
        .index_of(opponent_move)
        .ok_or_else(|| GameError::MoveNotInSet(opponent_move.to_string()))?;

    if p == c {
        return Ok(Outcome::Draw);
    }

    let n = moves.len();
    let forward_distance = (p + n - c) % n;
    if forward_distance <= moves.half() {
        Ok(Outcome::Win)
    } else {
        Ok(Outcome::Lose)
    }
}
