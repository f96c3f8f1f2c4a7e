use std::borrow::Cow;

use crate::romaji::{Alternative, MoraTable};

/// Split an unregistered unit into sub-symbols the tables know.
///
/// A small kana merges into the previous sub-symbol when the pair is a
/// registered digraph; every other character starts a new sub-symbol.
pub(super) fn decompose(table: &MoraTable, unit: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for c in unit.chars() {
        if table.is_small_kana(c) {
            if let Some(last) = parts.last_mut() {
                let mut merged = String::with_capacity(last.len() + c.len_utf8());
                merged.push_str(last);
                merged.push(c);
                if table.contains(&merged) {
                    *last = merged;
                    continue;
                }
            }
        }
        parts.push(c.to_string());
    }
    parts
}

/// Spellings for one sub-symbol: primary table, then small-kana table,
/// then the sub-symbol itself.
pub(super) fn alternatives<'t>(table: &'t MoraTable, part: &str) -> Cow<'t, [Alternative]> {
    if let Some(found) = table.moras(part) {
        return Cow::Borrowed(found);
    }
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(small) = table.small(c) {
            return Cow::Owned(small.iter().map(|s| Alternative::literal(s)).collect());
        }
    }
    Cow::Owned(vec![Alternative::literal(part)])
}
