//! End-to-end segment → expand runs over whole sentences.

use crate::unicode::is_typeable;
use crate::{expand, segment, CandidateSet};

fn pipeline(input: &str) -> Vec<(String, CandidateSet)> {
    let units = segment(input);
    let sets = expand(&units).unwrap();
    units.into_iter().zip(sets).collect()
}

#[test]
fn test_greeting() {
    let got = pipeline("こんにちは");
    assert_eq!(got[1].0, "んに");
    assert_eq!(got[1].1.as_slice(), &["n'ni", "nnni", "xnni"]);
    assert_eq!(got[0].1.as_slice(), &["co", "ko"]);
}

#[test]
fn test_mixed_script_sentence() {
    let got = pipeline("HELLO、せかい！");
    let flat: Vec<Vec<&str>> = got.iter().map(|(_, s)| s.iter().collect()).collect();
    assert_eq!(
        flat,
        vec![
            vec!["H"],
            vec!["E"],
            vec!["L"],
            vec!["L"],
            vec!["O"],
            vec![","],
            vec!["ce", "se"],
            vec!["ca", "ka"],
            vec!["i", "yi"],
            vec!["!"],
        ]
    );
}

#[test]
fn test_interjection_with_markers() {
    let got = pipeline("あっ、なんなん？");
    let units: Vec<&str> = got.iter().map(|(u, _)| u.as_str()).collect();
    assert_eq!(units, vec!["あ", "っ、", "な", "んな", "ん？"]);
    assert!(got[4].1.contains("n?"));
    assert!(!got[3].1.contains("nna"));
}

#[test]
fn test_every_spelling_is_typeable() {
    for sentence in [
        "きょうはいいてんきですね。",
        "ちゅうしゃじょうでまっています",
        "「ふぁーぶる」をよんだ！",
        "ゔぁいおりんとぴあの",
        "しんかんせんでいく",
        "ｎｏ．１のがっこう",
    ] {
        for (unit, set) in pipeline(sentence) {
            assert!(!set.is_empty(), "{unit} in {sentence}");
            for spelling in &set {
                assert!(is_typeable(spelling), "{spelling:?} for {unit}");
            }
        }
    }
}

#[test]
fn test_sokuon_across_digraph() {
    let got = pipeline("まっちゃ");
    assert_eq!(got[1].0, "っちゃ");
    let set = &got[1].1;
    for spelling in ["ttya", "ccya", "ccha", "xtucha", "ltsutya"] {
        assert!(set.contains(spelling), "missing {spelling}");
    }
    assert!(!set.contains("tcha"));
}
