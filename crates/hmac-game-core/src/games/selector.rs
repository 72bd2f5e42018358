//! Opponent move selection.

use crate::crypto::SecureRandomSource;
use crate::error::{GameError, Result};

/// Pick one move uniformly at random
pub fn select_move<'a, R, S>(rng: &mut R, moves: &'a [S]) -> Result<&'a str>
where
    R: SecureRandomSource + ?Sized,
    S: AsRef<str>,
{
    if moves.is_empty() {
        return Err(GameError::EmptyMoveSet);
    }
    let index = rng.random_index(moves.len())?;
    Ok(moves[index].as_ref())
}
