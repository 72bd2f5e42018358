//! Keyed hash function abstraction.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Length in bytes of every tag produced by a [`KeyedHashFunction`]
pub const TAG_LEN: usize = 32;

/// Trait for the keyed MAC that binds a move to a secret key
///
/// Implementations must be deterministic: the player recomputes the tag
/// after the reveal and compares it with the published one.
pub trait KeyedHashFunction {
    /// Compute the tag of `message` under `key`
    fn mac(&self, key: &[u8], message: &[u8]) -> [u8; TAG_LEN];

    /// Algorithm name shown next to published tags
    fn algorithm(&self) -> &'static str;
}

type HmacSha256Mac = Hmac<Sha256>;

/// HMAC-SHA256 (RFC 2104)
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl KeyedHashFunction for HmacSha256 {
    fn mac(&self, key: &[u8], message: &[u8]) -> [u8; TAG_LEN] {
        let mut mac =
            HmacSha256Mac::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(message);
        mac.finalize().into_bytes().into()
    }

    fn algorithm(&self) -> &'static str {
        "HMAC-SHA256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        let tag = HmacSha256.mac(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_sha256_deterministic() {
        let key = [7u8; 32];
        assert_eq!(HmacSha256.mac(&key, b"Rock"), HmacSha256.mac(&key, b"Rock"));
        assert_ne!(HmacSha256.mac(&key, b"Rock"), HmacSha256.mac(&key, b"Paper"));
    }
}
