use serde::Serialize;

/// Result of feeding one key to a [`TypingSession`](crate::TypingSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOutcome {
    /// The key continues at least one spelling of the current unit.
    Correct,
    /// No remaining spelling starts with the key. State is unchanged.
    Incorrect,
    /// The key finished the last unit.
    Completed,
    /// The target was already finished; the key is not recorded.
    AlreadyDone,
}

impl KeyOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeystrokeRecord {
    pub key: char,
    pub correct: bool,
    /// Index of the unit the key was typed against.
    pub unit: usize,
    /// Keys that would have been accepted at the time of the press.
    pub expected: Vec<char>,
}

/// How far the session has gone, counted in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub finished: usize,
    pub skipped: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.finished as f64 / self.total as f64
        }
    }
}
