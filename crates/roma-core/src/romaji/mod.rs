//! Static kana-to-romaji tables.
//!
//! The primary table maps a typing unit (plain kana, digraph, っ, ん) to
//! every spelling a typist may enter for it. The small-kana table holds the
//! standalone spellings of small kana; those are multiplied into the
//! digraph entries once, when the table is built.

mod config;
mod table;

pub use config::{parse_romaji_toml, RawTables, RomajiConfigError};
pub use table::{MoraTable, DEFAULT_TOML};

use serde::Serialize;

/// Sokuon: doubles the consonant that follows.
pub const SOKUON: char = 'っ';
/// Hatsuon: the moraic nasal.
pub const HATSUON: char = 'ん';

/// One way of typing a unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Alternative {
    /// Resolved by the next unit: repeat its first letter.
    Deferred,
    Literal(String),
}

impl Alternative {
    pub fn literal(s: &str) -> Self {
        Self::Literal(s.to_string())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            Self::Deferred => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }
}

/// Whether `c` needs at least one following character before its
/// spelling can be decided.
pub fn is_marker(c: char) -> bool {
    c == SOKUON || c == HATSUON
}
