//! Command-line and environment configuration.

use clap::{Args, Parser, Subcommand};
use kanji_core::{
    DirectionPolicy, LessonSelection, Level, ModePolicy, PracticeScope, SessionConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanji-drill", version, about = "Kanji meaning drill")]
pub struct Cli {
    /// Vocabulary dataset (JSON array of entries)
    #[arg(long, env = "KANJI_DATASET", default_value = "data/kanji.json")]
    pub dataset: PathBuf,

    /// File holding starred ids (defaults to the local data directory)
    #[arg(long, env = "KANJI_STARRED")]
    pub starred: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a drill session
    Drill(SettingsArgs),

    /// Five shuffled questions with the given settings
    Quick(SettingsArgs),

    /// Show the bank the settings produce
    Bank {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Star or unstar an entry by id
    Star {
        id: i64,
    },

    /// List starred entries
    Stars,
}

/// Session settings shared by the drill-related commands.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Level: N5, N4, N3, N2, N1
    #[arg(long, default_value = "N3", value_parser = parse_level)]
    pub level: Level,

    /// Lessons, comma-separated (e.g. "1,3"), or "all"
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub lessons: Vec<String>,

    /// Include compound entries
    #[arg(long)]
    pub compounds: bool,

    /// kanji-to-meaning, meaning-to-kanji or mixed
    #[arg(long, default_value = "mixed", value_parser = parse_direction)]
    pub direction: DirectionPolicy,

    /// multiple-choice, written or mixed
    #[arg(long, default_value = "mixed", value_parser = parse_mode)]
    pub mode: ModePolicy,

    /// Keep bank order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Number of questions
    #[arg(long, default_value = "10", value_parser = parse_count)]
    pub count: usize,

    /// Practice only starred entries
    #[arg(long)]
    pub starred_only: bool,
}

impl SettingsArgs {
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig {
            level: self.level,
            lessons: LessonSelection::from_values(&self.lessons),
            include_compounds: self.compounds,
            direction: self.direction,
            mode: self.mode,
            shuffle: !self.no_shuffle,
            count: self.count,
            practice_scope: if self.starred_only {
                PracticeScope::StarredOnly
            } else {
                PracticeScope::All
            },
        }
    }
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::parse(s).ok_or_else(|| format!("unknown level '{s}' (expected N5..N1)"))
}

fn parse_direction(s: &str) -> Result<DirectionPolicy, String> {
    DirectionPolicy::parse(s).ok_or_else(|| {
        format!("unknown direction '{s}' (expected kanji-to-meaning, meaning-to-kanji or mixed)")
    })
}

fn parse_mode(s: &str) -> Result<ModePolicy, String> {
    ModePolicy::parse(s)
        .ok_or_else(|| format!("unknown mode '{s}' (expected multiple-choice, written or mixed)"))
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid count '{s}'")),
    }
}

/// Where starred ids live when no path is given.
pub fn default_starred_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kanji-drill")
        .join("starred.json")
}
