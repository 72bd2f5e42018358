//! Cryptographic primitives for the HMAC game.
//!
//! This module provides:
//! - SecretKey and Commitment for the commit-reveal scheme
//! - SecureRandomSource for key generation and move selection
//! - KeyedHashFunction for binding a move to a key

mod commitment;
mod keyed_hash;
mod random;

pub use commitment::{
    commit, generate_secret_key, verify_reveal, Commitment, SecretKey, SECRET_KEY_LEN,
};
pub use keyed_hash::{HmacSha256, KeyedHashFunction, TAG_LEN};
pub use random::{OsRandom, SecureRandomSource, SeededRandom};
