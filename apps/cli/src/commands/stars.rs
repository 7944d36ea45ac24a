//! Starring entries outside a session.

use anyhow::{bail, Result};
use kanji_core::{Engine, RandomSource, StarStore};
use std::io::Write;

/// Toggle the star on `id`.
pub fn toggle<R, S>(engine: &mut Engine<R, S>, id: i64, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let Some(entry) = engine.entries().iter().find(|e| e.id == id) else {
        bail!("no entry with id {id}");
    };
    let label = format!("{} {}", entry.kanji, entry.meaning);

    if engine.toggle_star(id)? {
        writeln!(out, "★ {label}")?;
    } else {
        writeln!(out, "☆ {label}")?;
    }
    Ok(())
}

/// Print every starred entry, noting ids the dataset no longer has.
pub fn list<R, S>(engine: &Engine<R, S>, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    if engine.starred().is_empty() {
        writeln!(out, "No starred items yet.")?;
        return Ok(());
    }

    for id in engine.starred().iter() {
        match engine.entries().iter().find(|e| e.id == id) {
            Some(entry) => writeln!(
                out,
                "{:>6}  {}  {}  [{}]",
                entry.id, entry.kanji, entry.meaning, entry.level
            )?,
            None => writeln!(out, "{id:>6}  (not in dataset)")?,
        }
    }
    Ok(())
}
