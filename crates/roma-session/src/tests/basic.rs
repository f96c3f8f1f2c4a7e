use super::*;
use crate::{KeystrokeRecord, Progress};

// --- Single units ---

#[test]
fn test_digraph_unit() {
    let mut s = session("しょ");
    assert_eq!(s.expected_keys(), vec!['c', 's']);
    assert_eq!(s.type_str("sho"), vec![
        KeyOutcome::Correct,
        KeyOutcome::Correct,
        KeyOutcome::Completed,
    ]);
    assert_eq!(s.typed(), "sho");
    assert!(s.is_done());
    assert_eq!(s.current_unit(), None);
}

#[test]
fn test_spelling_narrows_as_typed() {
    let mut s = session("つ");
    assert_eq!(s.handle_key('t'), KeyOutcome::Correct);
    assert_eq!(s.expected_keys(), vec!['s', 'u']);
    assert_eq!(s.handle_key('s'), KeyOutcome::Correct);
    assert_eq!(s.expected_keys(), vec!['u']);
    assert_eq!(s.handle_key('u'), KeyOutcome::Completed);
}

#[test]
fn test_alternate_spelling_accepted() {
    let mut s = session("し");
    assert_eq!(type_string(&mut s, "ci"), Some(KeyOutcome::Completed));

    let mut s = session("し");
    assert_eq!(type_string(&mut s, "shi"), Some(KeyOutcome::Completed));
}

// --- Mistakes ---

#[test]
fn test_incorrect_key_leaves_state() {
    let mut s = session("か");
    assert_eq!(s.handle_key('x'), KeyOutcome::Incorrect);
    assert_eq!(s.expected_keys(), vec!['c', 'k']);
    assert_eq!(s.typed(), "");
    assert_eq!(
        s.records(),
        &[KeystrokeRecord {
            key: 'x',
            correct: false,
            unit: 0,
            expected: vec!['c', 'k'],
        }]
    );
    assert_eq!(type_string(&mut s, "ka"), Some(KeyOutcome::Completed));
    assert_eq!(s.records().len(), 3);
}

#[test]
fn test_incorrect_mid_unit() {
    let mut s = session("しょ");
    s.handle_key('s');
    assert_eq!(s.handle_key('a'), KeyOutcome::Incorrect);
    assert_eq!(s.expected_keys(), vec!['h', 'i', 'y']);
    assert_eq!(s.typed(), "s");
}

#[test]
fn test_single_n_before_vowel_rejected() {
    let mut s = session("こんにちは");
    type_string(&mut s, "ko");
    assert_eq!(s.current_unit(), Some("んに"));
    assert_eq!(s.handle_key('n'), KeyOutcome::Correct);
    assert_eq!(s.handle_key('i'), KeyOutcome::Incorrect);
    assert_eq!(s.expected_keys(), vec!['\'', 'n']);
}

// --- Spellings that extend a shorter one ---

#[test]
fn test_longer_spelling_carries_into_next_unit() {
    let mut s = session("ふぅか");
    assert!(s.target().units[0].candidates.contains("fuxu"));
    let outcomes = s.type_str("fuxuka");
    assert!(!outcomes.contains(&KeyOutcome::Incorrect), "{outcomes:?}");
    assert_eq!(outcomes.last(), Some(&KeyOutcome::Completed));
    assert_eq!(s.typed(), "fuxuka");
}

#[test]
fn test_carried_spelling_does_not_finish_next_unit() {
    let mut s = session("ふぅか");
    type_string(&mut s, "fu");
    assert_eq!(s.current_unit(), Some("か"));
    assert_eq!(s.expected_keys(), vec!['c', 'k', 'l', 'x']);
    assert_eq!(type_string(&mut s, "lu"), Some(KeyOutcome::Correct));
    assert_eq!(s.current_unit(), Some("か"));
    assert_eq!(s.expected_keys(), vec!['c', 'k']);
    assert_eq!(type_string(&mut s, "ca"), Some(KeyOutcome::Completed));
}

#[test]
fn test_short_spelling_still_accepted() {
    let mut s = session("くぅき");
    let outcomes = s.type_str("quki");
    assert_eq!(outcomes.last(), Some(&KeyOutcome::Completed));

    let mut s = session("くぅき");
    let outcomes = s.type_str("quxuki");
    assert!(!outcomes.contains(&KeyOutcome::Incorrect), "{outcomes:?}");
    assert!(s.is_done());
}

#[test]
fn test_record_keeps_expected_keys() {
    let mut s = session("しょ");
    type_string(&mut s, "sa");
    let records = s.records();
    assert_eq!(records[0].expected, vec!['c', 's']);
    assert!(records[0].correct);
    assert_eq!(records[1].expected, vec!['h', 'i', 'y']);
    assert!(!records[1].correct);
}

// --- Whole sentences ---

#[test]
fn test_full_sentence() {
    let mut s = session("こんにちは");
    let outcomes = s.type_str("konnnitiha");
    assert_eq!(outcomes.last(), Some(&KeyOutcome::Completed));
    assert!(outcomes[..outcomes.len() - 1]
        .iter()
        .all(|o| *o == KeyOutcome::Correct));
    assert_eq!(s.typed(), "konnnitiha");
    assert_eq!(s.accuracy(), Some(1.0));
}

#[test]
fn test_sokuon_spellings() {
    let mut s = session("あっと");
    assert_eq!(type_string(&mut s, "atto"), Some(KeyOutcome::Completed));

    let mut s = session("あっと");
    assert_eq!(type_string(&mut s, "axtsuto"), Some(KeyOutcome::Completed));

    let mut s = session("あっと");
    type_string(&mut s, "a");
    assert_eq!(s.handle_key('o'), KeyOutcome::Incorrect);
}

#[test]
fn test_already_done() {
    let mut s = session("あ");
    assert_eq!(s.handle_key('a'), KeyOutcome::Completed);
    assert_eq!(s.handle_key('a'), KeyOutcome::AlreadyDone);
    assert_eq!(s.records().len(), 1);
    assert!(s.expected_keys().is_empty());
}

#[test]
fn test_empty_target() {
    let mut s = session("");
    assert!(s.is_done());
    assert_eq!(s.handle_key('a'), KeyOutcome::AlreadyDone);
    assert!(!s.skip());
    assert_eq!(s.accuracy(), None);
    assert_eq!(s.progress().ratio(), 1.0);
}

// --- Skip and progress ---

#[test]
fn test_skip_unit() {
    let mut s = session("あい");
    s.handle_key('x');
    assert!(s.skip());
    assert_eq!(s.current_unit(), Some("い"));
    assert_eq!(s.skipped(), &[0]);
    assert_eq!(s.handle_key('y'), KeyOutcome::Correct);
    assert_eq!(s.handle_key('i'), KeyOutcome::Completed);
    assert_eq!(
        s.progress(),
        Progress {
            finished: 2,
            skipped: 1,
            total: 2
        }
    );
}

#[test]
fn test_skip_discards_partial_unit() {
    let mut s = session("しか");
    s.handle_key('s');
    s.skip();
    assert_eq!(s.expected_keys(), vec!['c', 'k']);
    assert_eq!(s.typed(), "s");
}

#[test]
fn test_remaining_romaji() {
    let mut s = session("こんにちは");
    assert_eq!(s.remaining_romaji(), "con'nitiha");
    s.handle_key('k');
    assert_eq!(s.remaining_romaji(), "on'nitiha");
    type_string(&mut s, "o");
    assert_eq!(s.remaining_romaji(), "n'nitiha");
}

#[test]
fn test_accuracy() {
    let mut s = session("か");
    type_string(&mut s, "qka");
    let acc = s.accuracy().unwrap();
    assert!((acc - 2.0 / 3.0).abs() < 1e-9);
    assert!(KeyOutcome::Completed.is_correct());
    assert!(!KeyOutcome::Incorrect.is_correct());
}
