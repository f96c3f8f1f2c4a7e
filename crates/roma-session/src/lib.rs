//! Keystroke checking against a [`TypingTarget`].
//!
//! `TypingSession` walks a target unit by unit. Each unit keeps the
//! suffixes of its spellings that are still reachable from what has been
//! typed so far, so a typist may switch between spellings mid-unit
//! ("shi" vs "si") as long as the prefix typed so far matches one of them.
//! A unit is finished by its shortest matching spelling; the longer ones
//! ride along into the next unit so "fuxuka" still types ふぅか.

mod types;

#[cfg(test)]
mod tests;

use roma_core::TypingTarget;
use tracing::{debug, debug_span};

pub use types::{KeyOutcome, KeystrokeRecord, Progress};

pub struct TypingSession {
    target: TypingTarget,
    cursor: usize,
    /// Key sequences that would finish the current unit. Besides the unit's
    /// own spelling suffixes this may hold the tail of a longer spelling of
    /// the previous unit followed by one of the current unit's spellings.
    /// Empty once done.
    remaining: Vec<String>,
    /// Keys accepted so far, across all units.
    typed: String,
    records: Vec<KeystrokeRecord>,
    skipped: Vec<usize>,
}

impl TypingSession {
    pub fn new(target: TypingTarget) -> Self {
        let mut session = Self {
            target,
            cursor: 0,
            remaining: Vec::new(),
            typed: String::new(),
            records: Vec::new(),
            skipped: Vec::new(),
        };
        session.load_unit();
        session
    }

    pub fn target(&self) -> &TypingTarget {
        &self.target
    }

    pub fn handle_key(&mut self, key: char) -> KeyOutcome {
        if self.is_done() {
            return KeyOutcome::AlreadyDone;
        }
        let _span = debug_span!("handle_key", unit = self.cursor, key = %key).entered();

        let expected = self.expected_keys();
        let matched: Vec<String> = self
            .remaining
            .iter()
            .filter_map(|s| s.strip_prefix(key))
            .map(str::to_string)
            .collect();
        let correct = !matched.is_empty();
        self.records.push(KeystrokeRecord {
            key,
            correct,
            unit: self.cursor,
            expected,
        });
        if !correct {
            debug!("miss");
            return KeyOutcome::Incorrect;
        }

        self.typed.push(key);
        if matched.iter().any(String::is_empty) {
            let leftover: Vec<String> = matched.into_iter().filter(|s| !s.is_empty()).collect();
            self.advance(&leftover);
            if self.is_done() {
                debug!(keys = self.records.len(), "target completed");
                return KeyOutcome::Completed;
            }
        } else {
            self.remaining = matched;
        }
        KeyOutcome::Correct
    }

    /// Feed every char of `keys`, returning the outcome of each.
    pub fn type_str(&mut self, keys: &str) -> Vec<KeyOutcome> {
        keys.chars().map(|c| self.handle_key(c)).collect()
    }

    /// Keys that would be accepted next, sorted. Empty once done.
    pub fn expected_keys(&self) -> Vec<char> {
        let mut keys: Vec<char> = self
            .remaining
            .iter()
            .filter_map(|s| s.chars().next())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Kana of the unit being typed.
    pub fn current_unit(&self) -> Option<&str> {
        self.target
            .units
            .get(self.cursor)
            .map(|u| u.kana.as_str())
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn records(&self) -> &[KeystrokeRecord] {
        &self.records
    }

    /// Indices of units passed over with [`skip`](Self::skip).
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    /// Abandon the current unit, including anything typed into it.
    /// Returns false when there is nothing left to skip.
    pub fn skip(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        debug!(unit = self.cursor, "skip");
        self.skipped.push(self.cursor);
        self.advance(&[]);
        true
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.target.units.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            finished: self.cursor,
            skipped: self.skipped.len(),
            total: self.target.units.len(),
        }
    }

    /// Share of recorded keystrokes that were correct.
    pub fn accuracy(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let correct = self.records.iter().filter(|r| r.correct).count();
        Some(correct as f64 / self.records.len() as f64)
    }

    /// One way to finish from here: the shortest remaining suffix of the
    /// current unit followed by the preferred spelling of each later unit.
    pub fn remaining_romaji(&self) -> String {
        let mut out = String::new();
        if let Some(head) = self.remaining.iter().min_by(|a, b| {
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }) {
            out.push_str(head);
        }
        for unit in self.target.units.iter().skip(self.cursor + 1) {
            if let Some(spelling) = unit.candidates.preferred() {
                out.push_str(spelling);
            }
        }
        out
    }

    /// Move to the next unit. `leftover` holds unfinished longer spellings
    /// of the unit just completed ("xu" after "fu" for ふぅ); each may still
    /// be typed out as a prefix of the next unit's spellings.
    fn advance(&mut self, leftover: &[String]) {
        self.cursor += 1;
        self.load_unit();
        if leftover.is_empty() || self.remaining.is_empty() {
            return;
        }
        let carried: Vec<String> = leftover
            .iter()
            .flat_map(|head| self.remaining.iter().map(move |s| format!("{head}{s}")))
            .collect();
        debug!(carried = carried.len(), "carrying unfinished spellings");
        for s in carried {
            if !self.remaining.contains(&s) {
                self.remaining.push(s);
            }
        }
    }

    fn load_unit(&mut self) {
        self.remaining = self
            .target
            .units
            .get(self.cursor)
            .map(|u| u.candidates.iter().map(str::to_string).collect())
            .unwrap_or_default();
    }
}
