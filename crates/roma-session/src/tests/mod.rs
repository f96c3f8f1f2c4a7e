mod basic;

use roma_core::TypingTarget;

use super::{KeyOutcome, TypingSession};

pub(super) fn session(text: &str) -> TypingSession {
    TypingSession::new(TypingTarget::new(text).unwrap())
}

/// Type `keys` and return only the final outcome.
pub(super) fn type_string(session: &mut TypingSession, keys: &str) -> Option<KeyOutcome> {
    session.type_str(keys).pop()
}
