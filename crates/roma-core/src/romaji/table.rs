use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_romaji_toml, RawTables, RomajiConfigError};
use super::Alternative;

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Read-only kana → romaji tables.
pub struct MoraTable {
    moras: BTreeMap<String, Vec<Alternative>>,
    small: HashMap<char, Vec<String>>,
}

impl MoraTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MoraTable {
        static INSTANCE: OnceLock<MoraTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        parse_romaji_toml(toml_str).map(Self::build)
    }

    /// Build the final tables in two phases.
    ///
    /// Phase one takes `[moras]` as written. Phase two extends every digraph
    /// (base kana followed by a small kana) with the product of the base's
    /// literal spellings and the small kana's spellings. Phase two reads only
    /// phase-one entries, so the result does not depend on iteration order.
    pub fn build(raw: RawTables) -> Self {
        let RawTables { moras: base, small } = raw;

        let mut moras = base.clone();
        let mut combined = 0usize;
        for (key, alternatives) in moras.iter_mut() {
            let mut chars = key.chars();
            let (Some(head), Some(tail), None) = (chars.next(), chars.next(), chars.next()) else {
                continue;
            };
            let head = head.to_string();
            let (Some(small_spellings), Some(head_alternatives)) =
                (small.get(&tail), base.get(&head))
            else {
                continue;
            };
            for head_spelling in head_alternatives.iter().filter_map(Alternative::as_literal) {
                for small_spelling in small_spellings {
                    let joined = Alternative::Literal(format!("{head_spelling}{small_spelling}"));
                    if !alternatives.contains(&joined) {
                        alternatives.push(joined);
                        combined += 1;
                    }
                }
            }
        }
        debug!(units = moras.len(), combined, "mora table built");

        Self {
            moras,
            small: small.into_iter().collect(),
        }
    }

    /// Spellings for a full typing unit, if the unit is registered.
    pub fn moras(&self, unit: &str) -> Option<&[Alternative]> {
        self.moras.get(unit).map(Vec::as_slice)
    }

    /// Standalone spellings of a small kana.
    pub fn small(&self, glyph: char) -> Option<&[String]> {
        self.small.get(&glyph).map(Vec::as_slice)
    }

    pub fn is_small_kana(&self, c: char) -> bool {
        self.small.contains_key(&c)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.moras.contains_key(unit)
    }

    /// Registered units in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Alternative])> {
        self.moras.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.moras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moras.is_empty()
    }
}
