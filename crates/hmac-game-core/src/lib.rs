//! HMAC Game Core Library
//!
//! Provable-fairness core for generalized rock-paper-scissors: the computer
//! commits to its move with HMAC-SHA256 before the player chooses, and
//! reveals the key afterwards so the player can check the commitment.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{
    Commitment, HmacSha256, KeyedHashFunction, OsRandom, SecretKey, SecureRandomSource,
};
pub use error::{GameError, Result, ValidationError};
pub use games::{determine_outcome, help_table, HelpTable, MoveSet, Outcome};
pub use protocol::{GameSession, RevealPayload, SessionId, SessionState, VerificationRecord};
