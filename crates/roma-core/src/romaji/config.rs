use std::collections::BTreeMap;

use serde::Deserialize;

use super::Alternative;

#[derive(Deserialize)]
struct RomajiConfig {
    moras: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    small: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[moras] table is empty")]
    Empty,
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("no spellings for key: {0}")]
    NoSpellings(String),
    #[error("spelling {spelling:?} for {key} is not typeable ASCII")]
    NonAsciiSpelling { key: String, spelling: String },
    #[error("deferred spelling is only allowed on single-character units: {0}")]
    DeferredInCompound(String),
    #[error("[small] key must be a single character: {0}")]
    SmallKeyLength(String),
    #[error("deferred spelling is not allowed in [small]: {0}")]
    DeferredInSmall(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parsed, validated table source before the digraph combination pass.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub moras: BTreeMap<String, Vec<Alternative>>,
    pub small: BTreeMap<char, Vec<String>>,
}

/// Parse TOML text into the primary and small-kana tables.
///
/// An empty string in `[moras]` becomes [`Alternative::Deferred`].
pub fn parse_romaji_toml(toml_str: &str) -> Result<RawTables, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.moras.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut moras = BTreeMap::new();
    for (key, spellings) in config.moras {
        if key.is_empty() {
            return Err(RomajiConfigError::EmptyKey("moras"));
        }
        if spellings.is_empty() {
            return Err(RomajiConfigError::NoSpellings(key));
        }
        let single = key.chars().count() == 1;
        let mut alternatives = Vec::with_capacity(spellings.len());
        for spelling in spellings {
            if spelling.is_empty() {
                if !single {
                    return Err(RomajiConfigError::DeferredInCompound(key));
                }
                alternatives.push(Alternative::Deferred);
            } else {
                check_spelling(&key, &spelling)?;
                alternatives.push(Alternative::Literal(spelling));
            }
        }
        moras.insert(key, alternatives);
    }

    let mut small = BTreeMap::new();
    for (key, spellings) in config.small {
        let mut chars = key.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            (None, _) => return Err(RomajiConfigError::EmptyKey("small")),
            _ => return Err(RomajiConfigError::SmallKeyLength(key)),
        };
        if spellings.is_empty() {
            return Err(RomajiConfigError::NoSpellings(key));
        }
        for spelling in &spellings {
            if spelling.is_empty() {
                return Err(RomajiConfigError::DeferredInSmall(key));
            }
            check_spelling(&key, spelling)?;
        }
        small.insert(glyph, spellings);
    }

    Ok(RawTables { moras, small })
}

fn check_spelling(key: &str, spelling: &str) -> Result<(), RomajiConfigError> {
    if crate::unicode::is_typeable(spelling) {
        Ok(())
    } else {
        Err(RomajiConfigError::NonAsciiSpelling {
            key: key.to_string(),
            spelling: spelling.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[moras]
"か" = ["ka", "ca"]
"っ" = ["", "xtu"]

[small]
"ゃ" = ["xya"]
"#;
        let raw = parse_romaji_toml(toml).unwrap();
        assert_eq!(raw.moras.len(), 2);
        assert_eq!(
            raw.moras["か"],
            vec![Alternative::literal("ka"), Alternative::literal("ca")]
        );
        assert_eq!(raw.moras["っ"][0], Alternative::Deferred);
        assert_eq!(raw.small[&'ゃ'], vec!["xya".to_string()]);
    }

    #[test]
    fn parse_default_toml() {
        let raw = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(raw.moras.len() > 200, "expected 200+ units, got {}", raw.moras.len());
        assert_eq!(raw.small.len(), 9);
    }

    #[test]
    fn small_section_is_optional() {
        let raw = parse_romaji_toml("[moras]\n\"あ\" = [\"a\"]\n").unwrap();
        assert!(raw.small.is_empty());
    }

    #[test]
    fn error_empty_moras() {
        let err = parse_romaji_toml("[moras]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_no_spellings() {
        let err = parse_romaji_toml("[moras]\n\"あ\" = []\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::NoSpellings(k) if k == "あ"));
    }

    #[test]
    fn error_non_ascii_spelling() {
        let err = parse_romaji_toml("[moras]\n\"あ\" = [\"あ\"]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::NonAsciiSpelling { .. }));
    }

    #[test]
    fn yen_sign_is_a_valid_spelling() {
        let raw = parse_romaji_toml("[moras]\n\"￥\" = [\"¥\"]\n").unwrap();
        assert_eq!(raw.moras["￥"], vec![Alternative::literal("¥")]);
    }

    #[test]
    fn error_deferred_in_compound() {
        let err = parse_romaji_toml("[moras]\n\"った\" = [\"\", \"tta\"]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::DeferredInCompound(_)));
    }

    #[test]
    fn error_small_key_length() {
        let toml = "[moras]\n\"あ\" = [\"a\"]\n[small]\n\"ゃゃ\" = [\"xya\"]\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::SmallKeyLength(_)));
    }

    #[test]
    fn error_deferred_in_small() {
        let toml = "[moras]\n\"あ\" = [\"a\"]\n[small]\n\"ゃ\" = [\"\"]\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::DeferredInSmall(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
