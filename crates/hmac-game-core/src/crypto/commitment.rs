//! SecretKey and Commitment for the commit-reveal scheme.

use super::keyed_hash::{HmacSha256, KeyedHashFunction, TAG_LEN};
use super::random::SecureRandomSource;
use crate::error::{GameError, Result};
use std::fmt;
use std::str::FromStr;

/// Secret key length in bytes (256 bits)
pub const SECRET_KEY_LEN: usize = 32;

/// Per-session secret key for the commitment MAC
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from a secure random source
    pub fn generate<R: SecureRandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; SECRET_KEY_LEN];
        rng.try_fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    /// Full lowercase hex encoding, for the reveal
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s).map(Self)
    }
}

/// Commitment = MAC(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; TAG_LEN]);

impl Commitment {
    /// Commit to a move name under `key`
    pub fn new<H: KeyedHashFunction + ?Sized>(hasher: &H, key: &SecretKey, move_name: &str) -> Self {
        Self(hasher.mac(key.as_bytes(), move_name.as_bytes()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Verify that the given key and move produce this commitment
    pub fn verify<H: KeyedHashFunction + ?Sized>(
        &self,
        hasher: &H,
        key: &SecretKey,
        move_name: &str,
    ) -> bool {
        *self == Self::new(hasher, key, move_name)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s).map(Self)
    }
}

/// Generate a fresh secret key
pub fn generate_secret_key<R: SecureRandomSource + ?Sized>(rng: &mut R) -> Result<SecretKey> {
    SecretKey::generate(rng)
}

/// Commit to `move_name` under `key`
pub fn commit<H: KeyedHashFunction + ?Sized>(
    hasher: &H,
    key: &SecretKey,
    move_name: &str,
) -> Commitment {
    Commitment::new(hasher, key, move_name)
}

/// Check a published HMAC-SHA256 commitment against a revealed key and move,
/// all given as they are shown to the player
pub fn verify_reveal(commitment_hex: &str, key_hex: &str, move_name: &str) -> Result<bool> {
    let commitment: Commitment = commitment_hex.parse()?;
    let key: SecretKey = key_hex.parse()?;
    Ok(commitment.verify(&HmacSha256, &key, move_name))
}

fn decode_32(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidHex(e.to_string()))?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| GameError::InvalidHex(format!("expected 32 bytes, got {}", bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::{OsRandom, SeededRandom};

    struct BrokenSource;

    impl SecureRandomSource for BrokenSource {
        fn try_fill(&mut self, _dest: &mut [u8]) -> Result<()> {
            Err(GameError::EntropyUnavailable("device closed".into()))
        }

        fn source_id(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_commitment_verification() {
        let key = generate_secret_key(&mut OsRandom).unwrap();
        let commitment = commit(&HmacSha256, &key, "Rock");

        assert!(commitment.verify(&HmacSha256, &key, "Rock"));
    }

    #[test]
    fn test_commitment_deterministic() {
        let key = SecretKey::from_bytes([3u8; 32]);
        assert_eq!(
            commit(&HmacSha256, &key, "Lizard"),
            commit(&HmacSha256, &key, "Lizard")
        );
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = generate_secret_key(&mut OsRandom).unwrap();
        assert_ne!(
            commit(&HmacSha256, &key, "Rock"),
            commit(&HmacSha256, &key, "Paper")
        );
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let key1 = generate_secret_key(&mut OsRandom).unwrap();
        let key2 = generate_secret_key(&mut OsRandom).unwrap();
        assert_ne!(key1, key2);
        assert_ne!(
            commit(&HmacSha256, &key1, "Rock"),
            commit(&HmacSha256, &key2, "Rock")
        );
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let mut rng = SeededRandom::new(11);
        let key1 = generate_secret_key(&mut rng).unwrap();
        let key2 = generate_secret_key(&mut rng).unwrap();
        let commitment = commit(&HmacSha256, &key1, "Rock");

        assert!(!commitment.verify(&HmacSha256, &key2, "Rock"));
        assert!(!commitment.verify(&HmacSha256, &key1, "Paper"));
    }

    #[test]
    fn test_entropy_failure_propagates() {
        assert!(matches!(
            generate_secret_key(&mut BrokenSource),
            Err(GameError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_hex_display_and_parse() {
        let key = SecretKey::from_bytes([0xab; 32]);
        let commitment = commit(&HmacSha256, &key, "Spock");
        let shown = commitment.to_string();

        assert_eq!(shown.len(), 64);
        assert_eq!(shown.parse::<Commitment>().unwrap(), commitment);
        assert_eq!(key.to_hex().parse::<SecretKey>().unwrap(), key);
    }

    #[test]
    fn test_debug_does_not_print_full_key() {
        let key = SecretKey::from_bytes([0xcd; 32]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_hex()));
    }

    #[test]
    fn test_verify_reveal_from_hex() {
        let key = generate_secret_key(&mut OsRandom).unwrap();
        let commitment = commit(&HmacSha256, &key, "Paper");

        assert!(verify_reveal(&commitment.to_string(), &key.to_hex(), "Paper").unwrap());
        assert!(!verify_reveal(&commitment.to_string(), &key.to_hex(), "Rock").unwrap());
    }

    #[test]
    fn test_verify_reveal_rejects_bad_hex() {
        assert!(matches!(
            verify_reveal("zz", "00", "Rock"),
            Err(GameError::InvalidHex(_))
        ));
        assert!(matches!(
            verify_reveal(&"00".repeat(31), &"00".repeat(32), "Rock"),
            Err(GameError::InvalidHex(_))
        ));
    }
}
