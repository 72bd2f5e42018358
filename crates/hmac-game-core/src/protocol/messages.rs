//! Records handed to the player for offline verification.

use super::session::RevealPayload;
use super::types::SessionId;
use crate::crypto::{Commitment, HmacSha256, SecretKey};
use crate::games::{MoveSet, Outcome};
use serde::{Deserialize, Serialize};

/// Everything needed to re-check a finished round offline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub session_id: SessionId,
    pub algorithm: String,
    pub moves: Vec<String>,
    #[serde(with = "hex_32")]
    pub commitment: [u8; 32],
    #[serde(with = "hex_32")]
    pub key: [u8; 32],
    pub opponent_move: String,
    pub player_move: String,
    pub outcome: Outcome,
}

impl VerificationRecord {
    pub fn new(
        session_id: SessionId,
        algorithm: &str,
        moves: &MoveSet,
        reveal: &RevealPayload,
    ) -> Self {
        Self {
            session_id,
            algorithm: algorithm.to_string(),
            moves: moves.to_vec(),
            commitment: *reveal.commitment.as_bytes(),
            key: *reveal.secret_key.as_bytes(),
            opponent_move: reveal.opponent_move.clone(),
            player_move: reveal.player_move.clone(),
            outcome: reveal.outcome,
        }
    }

    /// Recompute HMAC-SHA256(key, opponent_move) and compare with the commitment
    pub fn verify(&self) -> bool {
        Commitment::from_bytes(self.commitment).verify(
            &HmacSha256,
            &SecretKey::from_bytes(self.key),
            &self.opponent_move,
        )
    }
}

mod hex_32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
