use std::process;

use clap::{Parser, Subcommand};

use roma_cli::commands::{config_ops, text_ops};
use roma_cli::{read_file, trace_init, CliError};
use roma_core::romaji::MoraTable;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romatool", about = "Kana segmentation and romaji expansion diagnostics")]
struct Cli {
    /// Custom romaji table TOML (replaces the embedded one)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split text into typing units, one per line
    Segment {
        text: String,
    },
    /// Show every romaji spelling of each typing unit
    Expand {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a typing target (normalization, units, preferred romaji)
    Target {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the romaji table, or the spellings of one unit
    Table {
        kana: Option<String>,
    },
    /// Replay typed keys against a text and report each keystroke
    Check {
        text: String,
        typed: String,
    },
    /// Print the embedded romaji table TOML
    RomajiExport,
    /// Validate a romaji table TOML file
    RomajiValidate {
        file: String,
    },
    /// Print the embedded settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        file: String,
    },
}

fn load_overrides(romaji: Option<&str>, settings: Option<&str>) -> Result<(), CliError> {
    if let Some(path) = romaji {
        MoraTable::init_custom(read_file(path)?)?;
    }
    if let Some(path) = settings {
        roma_core::settings::init_custom(read_file(path)?)?;
    }
    Ok(())
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Segment { text } => Ok(text_ops::segment_cmd(&text)),
        Command::Expand { text, json } => text_ops::expand_cmd(&text, json),
        Command::Target { text, json } => text_ops::target_cmd(&text, json),
        Command::Table { kana } => config_ops::table_cmd(kana.as_deref()),
        Command::Check { text, typed } => text_ops::check_cmd(&text, &typed),
        Command::RomajiExport => Ok(config_ops::romaji_export()),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => Ok(config_ops::settings_export()),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();

    die!(
        load_overrides(cli.romaji.as_deref(), cli.settings.as_deref()),
        "Error: {}"
    );
    let out = die!(run(cli.command), "Error: {}");
    print!("{out}");
}
