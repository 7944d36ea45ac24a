//! Interactive drill loop over stdin/stdout.

use crate::config::SettingsArgs;
use anyhow::Result;
use kanji_core::{AnswerMode, DrillError, Engine, GradeOutcome, RandomSource, StarStore};
use std::io::{BufRead, Write};

const HELP: &str = "Type an answer (or an option number) and press Enter.\n\
Commands: :show reveal answer, :next next question, :star toggle star, \
:restart start over, :quit leave";

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Answer(String),
    Show,
    Next,
    Star,
    Restart,
    Quit,
    Help,
}

pub fn parse_action(line: &str) -> Action {
    match line.trim() {
        ":show" | ":s" => Action::Show,
        ":next" | ":n" => Action::Next,
        ":star" => Action::Star,
        ":restart" | ":r" => Action::Restart,
        ":quit" | ":q" => Action::Quit,
        ":help" | ":h" | "?" => Action::Help,
        _ => Action::Answer(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Start a session from the settings, then run it interactively.
pub fn execute<R, S>(
    engine: &mut Engine<R, S>,
    settings: &SettingsArgs,
    quick: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let config = settings.to_config();
    let (count, shuffle) = (config.count, config.shuffle);
    let bank = engine.build_bank(config);
    writeln!(out, "{}", bank.describe())?;

    let started = if quick {
        engine.quick_practice().map(|_| ())
    } else {
        engine.start_session(count, shuffle).map(|_| ())
    };
    if let Err(e) = started {
        writeln!(out, "{e}")?;
        return Ok(());
    }

    run_session(engine, input, out)
}

/// Drive the active session until the user quits or input ends.
pub fn run_session<R, S>(
    engine: &mut Engine<R, S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    writeln!(out, "{}", engine.config().summary_line())?;
    render_question(engine, out)?;

    let mut lines = input.lines();
    loop {
        let Some(line) = lines.next() else {
            engine.quit();
            return Ok(());
        };
        let line = line?;

        if engine.progress()?.finished {
            match parse_action(&line) {
                Action::Restart => {
                    restart(engine, out)?;
                    continue;
                }
                Action::Quit => {
                    engine.quit();
                    return Ok(());
                }
                _ => {
                    writeln!(out, "Type :restart to go again or :quit to leave.")?;
                    continue;
                }
            }
        }

        match parse_action(&line) {
            Action::Answer(text) => submit(engine, &text, out)?,
            Action::Show => match engine.reveal_answer() {
                Ok(reveal) => writeln!(out, "Answer: {} ({})", reveal.answer, reveal.kind_label())?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Action::Next => match engine.advance() {
                Ok(progress) if progress.finished => render_summary(engine, out)?,
                Ok(_) => render_question(engine, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Action::Star => match engine.toggle_current_star() {
                Ok(true) => writeln!(out, "★ Marked for review")?,
                Ok(false) => writeln!(out, "☆ Unstarred")?,
                Err(e) => writeln!(out, "{:#}", anyhow::Error::new(e))?,
            },
            Action::Restart => restart(engine, out)?,
            Action::Quit => {
                engine.quit();
                writeln!(out, "{}", engine.bank().describe())?;
                return Ok(());
            }
            Action::Help => writeln!(out, "{HELP}")?,
        }
    }
}

fn submit<R, S>(engine: &mut Engine<R, S>, text: &str, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let question = engine.current_question()?;
    let mode = question.mode;
    let choice = choice_from_input(&question.choices, text);

    let result = match mode {
        AnswerMode::MultipleChoice => match choice {
            Some(choice) => engine.submit_choice(Some(&choice)),
            None if text.trim().is_empty() => engine.submit_choice(None),
            None => Err(DrillError::UnknownChoice(text.trim().to_string())),
        },
        AnswerMode::Written => engine.submit_written(text),
    };

    match result {
        Ok(grade) => match grade.outcome {
            GradeOutcome::Correct => writeln!(out, "Correct ✅")?,
            GradeOutcome::Incorrect => {
                writeln!(out, "Not quite ❌  Correct: {}", grade.correct_answer)?
            }
            GradeOutcome::AlreadyCorrect => {
                writeln!(out, "Already correct ✅ Type :next when you're ready.")?
            }
        },
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

/// Map "2" to the second option, or accept the option text itself.
fn choice_from_input(choices: &[String], text: &str) -> Option<String> {
    let text = text.trim();
    if let Ok(n) = text.parse::<usize>() {
        if (1..=choices.len()).contains(&n) {
            return Some(choices[n - 1].clone());
        }
    }
    choices.iter().find(|c| c.as_str() == text).cloned()
}

fn restart<R, S>(engine: &mut Engine<R, S>, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    match engine.restart() {
        Ok(_) => render_question(engine, out),
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(())
        }
    }
}

fn render_question<R, S>(engine: &Engine<R, S>, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let progress = engine.progress()?;
    let question = engine.current_question()?;
    let star = if engine.is_starred(question.entry.id) {
        "★"
    } else {
        "☆"
    };

    writeln!(out)?;
    writeln!(
        out,
        "Q {} / {}   ✓ {}  ✗ {}   {}",
        progress.index + 1,
        progress.total,
        progress.correct,
        progress.wrong_attempts,
        star
    )?;
    writeln!(out, "{}", question.prompt_label())?;
    writeln!(out, "  {}", question.prompt())?;
    for (i, choice) in question.choices.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, choice)?;
    }
    Ok(())
}

fn render_summary<R, S>(engine: &Engine<R, S>, out: &mut impl Write) -> Result<()>
where
    R: RandomSource,
    S: StarStore,
{
    let summary = engine.summary()?;
    writeln!(out)?;
    writeln!(out, "Done! Score {}", summary.score_text())?;
    writeln!(
        out,
        "Correct: {}  Wrong attempts: {}",
        summary.correct, summary.wrong_attempts
    )?;
    writeln!(out, "Type :restart to go again or :quit to leave.")?;
    Ok(())
}
