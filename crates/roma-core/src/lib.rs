//! Kana segmentation and romaji candidate expansion.
//!
//! [`segment`] splits a kana/alphabet/symbol string into typing units and
//! [`expand`] maps each unit to every romaji spelling a typist may enter.
//! [`TypingTarget`] runs both over a prepared sentence.

pub mod candidate;
pub mod error;
pub mod expand;
pub mod romaji;
pub mod segment;
pub mod settings;
pub mod target;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use candidate::CandidateSet;
pub use error::ExpandError;
pub use expand::{expand, expand_unit, Expander};
pub use romaji::MoraTable;
pub use segment::{segment, segment_with, Segments};
pub use target::{TypingTarget, TypingUnit};
