use std::fmt::Write;

use serde::Serialize;

use roma_core::{expand, segment, CandidateSet, TypingTarget};
use roma_session::{KeyOutcome, TypingSession};

use super::{column_width, pad};
use crate::CliError;

#[derive(Serialize)]
struct ExpandedUnit<'a> {
    unit: &'a str,
    candidates: &'a CandidateSet,
}

/// One unit per line.
pub fn segment_cmd(text: &str) -> String {
    segment(text)
        .iter()
        .map(|u| format!("{u}\n"))
        .collect()
}

pub fn expand_cmd(text: &str, json: bool) -> Result<String, CliError> {
    let units = segment(text);
    let sets = expand(&units)?;

    if json {
        let rows: Vec<ExpandedUnit> = units
            .iter()
            .zip(&sets)
            .map(|(unit, candidates)| ExpandedUnit { unit, candidates })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)? + "\n");
    }

    let width = column_width(units.iter().map(String::as_str));
    let mut out = String::new();
    for (unit, set) in units.iter().zip(&sets) {
        let spellings: Vec<&str> = set.iter().collect();
        let _ = writeln!(out, "{}  {}", pad(unit, width), spellings.join(" "));
    }
    Ok(out)
}

pub fn target_cmd(text: &str, json: bool) -> Result<String, CliError> {
    let target = TypingTarget::new(text)?;
    if json {
        return Ok(serde_json::to_string_pretty(&target)? + "\n");
    }

    let width = column_width(target.units.iter().map(|u| u.kana.as_str()));
    let mut out = String::new();
    let _ = writeln!(out, "text:   {}", target.text);
    let _ = writeln!(out, "kana:   {}", target.kana);
    let _ = writeln!(out, "romaji: {}", target.romaji());
    for unit in &target.units {
        let _ = writeln!(
            out,
            "  {}  {} ({} spellings)",
            pad(&unit.kana, width),
            unit.candidates.preferred().unwrap_or(""),
            unit.candidates.len()
        );
    }
    Ok(out)
}

/// Replay `typed` against `text` and report every keystroke.
pub fn check_cmd(text: &str, typed: &str) -> Result<String, CliError> {
    let mut session = TypingSession::new(TypingTarget::new(text)?);
    let mut out = String::new();

    for key in typed.chars() {
        let unit = session.current_unit().unwrap_or("").to_string();
        let mark = match session.handle_key(key) {
            KeyOutcome::Correct | KeyOutcome::Completed => "ok".to_string(),
            KeyOutcome::Incorrect => {
                let keys: String = session
                    .records()
                    .last()
                    .map(|r| r.expected.iter().collect())
                    .unwrap_or_default();
                format!("miss (expected one of: {keys})")
            }
            KeyOutcome::AlreadyDone => "extra".to_string(),
        };
        let _ = writeln!(out, "{key:?}  {}  {mark}", pad(&unit, 6));
    }

    let progress = session.progress();
    let _ = writeln!(out, "typed:    {}", session.typed());
    let _ = writeln!(out, "units:    {}/{}", progress.finished, progress.total);
    if let Some(accuracy) = session.accuracy() {
        let _ = writeln!(out, "accuracy: {:.1}%", accuracy * 100.0);
    }
    match session.current_unit() {
        None => {
            let _ = writeln!(out, "status:   completed");
        }
        Some(unit) => {
            let _ = writeln!(
                out,
                "status:   incomplete at {unit} (rest: {})",
                session.remaining_romaji()
            );
        }
    }
    Ok(out)
}
