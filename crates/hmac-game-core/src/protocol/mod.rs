//! Session protocol and messages.

mod messages;
mod session;
mod types;

pub use messages::VerificationRecord;
pub use session::{GameSession, RevealPayload};
pub use types::{SessionId, SessionState};
