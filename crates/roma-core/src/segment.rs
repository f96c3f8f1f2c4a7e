//! Splitting a kana/alphabet/symbol string into typing units.
//!
//! A unit closes after each character unless that character is っ or ん
//! (both need the next character to pick a spelling) or the next character
//! is a small kana (it joins the current one as a digraph). Nothing is
//! dropped: the units always concatenate back to the input.

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, debug_span};

use crate::romaji::{is_marker, MoraTable};

/// Lazy iterator over the typing units of a string.
pub struct Segments<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    table: &'a MoraTable,
}

impl<'a> Segments<'a> {
    pub fn new(table: &'a MoraTable, input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            table,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, _) = *self.chars.peek()?;
        while let Some((i, c)) = self.chars.next() {
            if is_marker(c) {
                continue;
            }
            match self.chars.peek() {
                Some(&(_, next)) if self.table.is_small_kana(next) => continue,
                _ => return Some(&self.input[start..i + c.len_utf8()]),
            }
        }
        // Input ended on っ or ん (or a run of them).
        Some(&self.input[start..])
    }
}

/// Segment `input` with the global table.
pub fn segment(input: &str) -> Vec<String> {
    segment_with(MoraTable::global(), input)
}

pub fn segment_with(table: &MoraTable, input: &str) -> Vec<String> {
    let _span = debug_span!("segment", input).entered();
    let units: Vec<String> = Segments::new(table, input).map(str::to_string).collect();
    debug!(unit_count = units.len());
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, expected: &[&str]) {
        assert_eq!(segment(input), expected, "segment({input})");
    }

    #[test]
    fn test_ascii_and_symbols() {
        check(
            "HELLO、せかい！",
            &["H", "E", "L", "L", "O", "、", "せ", "か", "い", "！"],
        );
    }

    #[test]
    fn test_hatsuon_joins_next() {
        check("こんにちは", &["こ", "んに", "ち", "は"]);
    }

    #[test]
    fn test_sokuon_joins_next() {
        check("あっというま", &["あ", "っと", "い", "う", "ま"]);
        check("しょっく", &["しょ", "っく"]);
    }

    #[test]
    fn test_digraph_and_long_vowel() {
        check("ふぁーぶる", &["ふぁ", "ー", "ぶ", "る"]);
    }

    #[test]
    fn test_markers_before_punctuation() {
        check("あっ、なんなん？", &["あ", "っ、", "な", "んな", "ん？"]);
    }

    #[test]
    fn test_trailing_markers() {
        check("あっ", &["あ", "っ"]);
        check(
            "あしたはあめがふるかもしれません",
            &[
                "あ", "し", "た", "は", "あ", "め", "が", "ふ", "る", "か", "も", "し", "れ", "ま",
                "せ", "ん",
            ],
        );
        check("ん", &["ん"]);
    }

    #[test]
    fn test_unusual_runs() {
        check("っっ", &["っっ"]);
        check("ふぁぁ", &["ふぁぁ"]);
        check("あぁぁ", &["あぁぁ"]);
        check("っきゃぁ", &["っきゃぁ"]);
        check("ぁぁ", &["ぁぁ"]);
        check("んんっ", &["んんっ"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_iterator_is_lazy_and_borrowed() {
        let table = MoraTable::global();
        let mut it = Segments::new(table, "きゃっと");
        assert_eq!(it.next(), Some("きゃ"));
        assert_eq!(it.next(), Some("っと"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
