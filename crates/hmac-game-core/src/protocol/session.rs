//! Game session: commit the opponent's move, take the player's, reveal.

use super::types::{SessionId, SessionState};
use crate::crypto::{
    commit, generate_secret_key, Commitment, HmacSha256, KeyedHashFunction, OsRandom, SecretKey,
    SecureRandomSource,
};
use crate::error::{GameError, Result};
use crate::games::{determine_outcome, select_move, MoveSet, Outcome};
use std::fmt;
use tracing::{debug, info};

/// Everything the player needs to check the round after it is decided
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPayload {
    pub outcome: Outcome,
    pub secret_key: SecretKey,
    pub opponent_move: String,
    pub player_move: String,
    /// The commitment published before the player moved
    pub commitment: Commitment,
}

impl RevealPayload {
    /// Recompute the commitment from the revealed key and move
    pub fn verify<H: KeyedHashFunction + ?Sized>(&self, hasher: &H) -> bool {
        self.commitment
            .verify(hasher, &self.secret_key, &self.opponent_move)
    }
}

/// Opponent secrets held between commit and reveal
struct Hidden {
    secret_key: SecretKey,
    opponent_move: String,
    commitment: Commitment,
}

enum Phase {
    Created,
    Committed(Hidden),
    Resolved(RevealPayload),
    Closed,
}

impl Phase {
    fn state(&self) -> SessionState {
        match self {
            Phase::Created => SessionState::Created,
            Phase::Committed(_) => SessionState::Committed,
            Phase::Resolved(_) => SessionState::Resolved,
            Phase::Closed => SessionState::Closed,
        }
    }
}

/// One round against the computer
///
/// The opponent's move and key stay private until
/// [`submit_player_move`](Self::submit_player_move) succeeds. Every failed
/// call leaves the session in the state it was in before.
pub struct GameSession<R = OsRandom, H = HmacSha256> {
    id: SessionId,
    moves: MoveSet,
    rng: R,
    hasher: H,
    phase: Phase,
}

impl GameSession {
    /// Validate `moves` and create a session backed by the OS CSPRNG and
    /// HMAC-SHA256
    pub fn new<I, S>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_capabilities(MoveSet::new(moves)?, OsRandom, HmacSha256))
    }
}

impl<R: SecureRandomSource, H: KeyedHashFunction> GameSession<R, H> {
    /// Create a session with injected randomness and keyed hash
    pub fn with_capabilities(moves: MoveSet, rng: R, hasher: H) -> Self {
        let id = SessionId::new();
        debug!(session = %id, moves = moves.len(), "session created");
        Self {
            id,
            moves,
            rng,
            hasher,
            phase: Phase::Created,
        }
    }

    /// Pick the opponent's move, commit to it, and return the commitment
    pub fn start(&mut self) -> Result<Commitment> {
        if !matches!(self.phase, Phase::Created) {
            return Err(self.invalid_state("start"));
        }

        let opponent_move = select_move(&mut self.rng, self.moves.as_slice())?.to_string();
        let secret_key = generate_secret_key(&mut self.rng)?;
        let commitment = commit(&self.hasher, &secret_key, &opponent_move);

        self.phase = Phase::Committed(Hidden {
            secret_key,
            opponent_move,
            commitment,
        });

        info!(
            session = %self.id,
            rng = self.rng.source_id(),
            algorithm = self.hasher.algorithm(),
            %commitment,
            "opponent move committed"
        );
        Ok(commitment)
    }

    /// Accept the player's move, decide the round, and reveal the key
    pub fn submit_player_move(&mut self, player_move: &str) -> Result<RevealPayload> {
        let hidden = match &self.phase {
            Phase::Committed(hidden) => hidden,
            _ => return Err(self.invalid_state("submit a move")),
        };

        if !self.moves.contains(player_move) {
            debug!(session = %self.id, player_move, "rejected move outside the move set");
            return Err(GameError::InvalidMove(player_move.to_string()));
        }

        let outcome = determine_outcome(player_move, &hidden.opponent_move, &self.moves)?;

        let hidden = match std::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::Committed(hidden) => hidden,
            _ => unreachable!("phase checked above"),
        };
        let reveal = RevealPayload {
            outcome,
            secret_key: hidden.secret_key,
            opponent_move: hidden.opponent_move,
            player_move: player_move.to_string(),
            commitment: hidden.commitment,
        };

        info!(
            session = %self.id,
            player_move,
            opponent_move = %reveal.opponent_move,
            %outcome,
            "round resolved"
        );
        self.phase = Phase::Resolved(reveal.clone());
        Ok(reveal)
    }

    /// End the session; returns the reveal only if the round was played
    pub fn close(&mut self) -> Option<RevealPayload> {
        let previous = std::mem::replace(&mut self.phase, Phase::Closed);
        debug!(session = %self.id, from = %previous.state(), "session closed");
        match previous {
            Phase::Resolved(reveal) => Some(reveal),
            _ => None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.phase.state()
    }

    /// The published commitment, once there is one
    pub fn commitment(&self) -> Option<Commitment> {
        match &self.phase {
            Phase::Committed(hidden) => Some(hidden.commitment),
            Phase::Resolved(reveal) => Some(reveal.commitment),
            Phase::Created | Phase::Closed => None,
        }
    }

    /// The reveal, while the session is resolved
    pub fn reveal(&self) -> Option<&RevealPayload> {
        match &self.phase {
            Phase::Resolved(reveal) => Some(reveal),
            _ => None,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    fn invalid_state(&self, operation: &'static str) -> GameError {
        GameError::InvalidState {
            operation,
            state: self.phase.state().as_str(),
        }
    }
}

impl<R, H> fmt::Debug for GameSession<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("state", &self.phase.state())
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}
