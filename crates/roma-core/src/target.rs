//! A practice sentence turned into typing units with their spellings.

use serde::Serialize;
use tracing::debug_span;

use crate::candidate::CandidateSet;
use crate::error::ExpandError;
use crate::expand::Expander;
use crate::romaji::MoraTable;
use crate::segment::Segments;
use crate::settings::{settings, NormalizeSettings};
use crate::unicode::{katakana_to_hiragana, strip_spaces_between_kana};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypingUnit {
    pub kana: String,
    pub candidates: CandidateSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypingTarget {
    /// Text as given.
    pub text: String,
    /// Text after preparation, the concatenation of every unit's kana.
    pub kana: String,
    pub units: Vec<TypingUnit>,
}

impl TypingTarget {
    /// Build a target with the global table and settings.
    pub fn new(text: &str) -> Result<Self, ExpandError> {
        Self::build(MoraTable::global(), &settings().normalize, text)
    }

    pub fn build(
        table: &MoraTable,
        normalize: &NormalizeSettings,
        text: &str,
    ) -> Result<Self, ExpandError> {
        let _span = debug_span!("typing_target", text).entered();
        let kana = prepare(normalize, text);
        let expander = Expander::new(table);
        let units = Segments::new(table, &kana)
            .map(|unit| {
                Ok(TypingUnit {
                    kana: unit.to_string(),
                    candidates: expander.expand_unit(unit)?,
                })
            })
            .collect::<Result<Vec<_>, ExpandError>>()?;
        Ok(Self {
            text: text.to_string(),
            kana,
            units,
        })
    }

    /// The shortest spelling of every unit, joined.
    pub fn romaji(&self) -> String {
        self.units
            .iter()
            .filter_map(|u| u.candidates.preferred())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn prepare(normalize: &NormalizeSettings, text: &str) -> String {
    let mut s = text.to_string();
    if normalize.fold_katakana {
        s = katakana_to_hiragana(&s);
    }
    if normalize.strip_kana_spaces {
        s = strip_spaces_between_kana(&s);
    }
    s
}
