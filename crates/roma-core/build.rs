use toml::{Table, Value};

const ROMAJI: &str = "src/romaji/default_romaji.toml";
const SETTINGS: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={ROMAJI}");
    println!("cargo:rerun-if-changed={SETTINGS}");

    let romaji = parse(ROMAJI, include_str!("src/romaji/default_romaji.toml"));
    for section in ["moras", "small"] {
        let entries = table(ROMAJI, &romaji, section);
        if entries.is_empty() {
            panic!("{ROMAJI}: [{section}] is empty");
        }
        for (kana, spellings) in entries {
            let ok = spellings
                .as_array()
                .is_some_and(|a| !a.is_empty() && a.iter().all(Value::is_str));
            if !ok {
                panic!("{ROMAJI}: [{section}] {kana} needs a non-empty list of strings");
            }
        }
    }

    let settings = parse(SETTINGS, include_str!("src/default_settings.toml"));
    let normalize = table(SETTINGS, &settings, "normalize");
    for key in ["fold_katakana", "strip_kana_spaces"] {
        if !normalize.get(key).is_some_and(Value::is_bool) {
            panic!("{SETTINGS}: [normalize] {key} must be a boolean");
        }
    }
}

fn parse(path: &str, content: &str) -> Table {
    content
        .parse::<Table>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn table<'a>(path: &str, root: &'a Table, section: &str) -> &'a Table {
    root.get(section)
        .and_then(Value::as_table)
        .unwrap_or_else(|| panic!("{path}: missing [{section}] table"))
}
