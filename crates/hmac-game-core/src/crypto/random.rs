//! Secure random source abstraction.

use crate::error::{GameError, Result};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Trait for the randomness a game session consumes
///
/// Implementations can be:
/// - OsRandom for production (operating system CSPRNG)
/// - SeededRandom for reproducible tests
pub trait SecureRandomSource {
    /// Fill `dest` with random bytes, or fail without falling back
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Stable identifier for tracing
    fn source_id(&self) -> &'static str;

    /// Uniform index in `0..upper` by rejection sampling
    fn random_index(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(GameError::EmptyMoveSet);
        }
        let upper = upper as u64;
        // Largest multiple of `upper`; values at or above it would skew the modulo.
        let zone = (u64::MAX / upper) * upper;
        loop {
            let mut buf = [0u8; 8];
            self.try_fill(&mut buf)?;
            let value = u64::from_le_bytes(buf);
            if value < zone {
                return Ok((value % upper) as usize);
            }
        }
    }
}

/// Operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))
    }

    fn source_id(&self) -> &'static str {
        "os"
    }
}

/// Seeded generator for tests and replays. Not for real games.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecureRandomSource for SeededRandom {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn source_id(&self) -> &'static str {
        "seeded"
    }
}
