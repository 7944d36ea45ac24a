//! Show the bank a set of settings produces.

use crate::config::SettingsArgs;
use anyhow::Result;
use kanji_core::{Engine, RandomSource, StarStore};
use std::io::Write;

pub fn execute<R, S>(
    engine: &mut Engine<R, S>,
    settings: &SettingsArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let lessons = engine.lesson_count(settings.level);
    let bank = engine.build_bank(settings.to_config());

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(bank.entries())?)?;
        return Ok(());
    }

    writeln!(out, "{}", bank.describe())?;
    writeln!(out, "Lessons in {}: {}", settings.level, lessons)?;
    for entry in bank.entries() {
        let kind = if entry.compound { " (compound)" } else { "" };
        writeln!(out, "{:>6}  {}  {}{}", entry.id, entry.kanji, entry.meaning, kind)?;
    }
    Ok(())
}
