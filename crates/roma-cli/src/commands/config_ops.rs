use std::fmt::Write;

use roma_core::romaji::{parse_romaji_toml, Alternative, MoraTable, DEFAULT_TOML};
use roma_core::settings::{default_toml, parse_settings_toml};

use super::{column_width, pad};
use crate::{read_file, CliError};

fn format_spellings(spellings: &[Alternative]) -> String {
    spellings
        .iter()
        .map(|a| a.as_literal().unwrap_or("(next)"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The whole table, or the entry for a single unit.
pub fn table_cmd(kana: Option<&str>) -> Result<String, CliError> {
    let table = MoraTable::global();
    if let Some(kana) = kana {
        let spellings = table
            .moras(kana)
            .ok_or_else(|| CliError::NotInTable(kana.to_string()))?;
        return Ok(format_spellings(spellings) + "\n");
    }

    let width = column_width(table.iter().map(|(k, _)| k));
    let mut out = String::new();
    for (unit, spellings) in table.iter() {
        let _ = writeln!(out, "{}  {}", pad(unit, width), format_spellings(spellings));
    }
    Ok(out)
}

pub fn romaji_export() -> String {
    DEFAULT_TOML.to_string()
}

pub fn romaji_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let raw = parse_romaji_toml(&content)?;
    let units = raw.moras.len();
    let small = raw.small.len();
    let table = MoraTable::build(raw);
    Ok(format!(
        "OK: {units} units, {small} small kana, {} after combination\n",
        table.len()
    ))
}

pub fn settings_export() -> String {
    default_toml().to_string()
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = parse_settings_toml(&content)?;
    Ok(format!(
        "OK: normalize.fold_katakana={}, normalize.strip_kana_spaces={}\n",
        s.normalize.fold_katakana, s.normalize.strip_kana_spaces
    ))
}
