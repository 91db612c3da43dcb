//! Line-oriented terminal front end for the wizard.
//!
//! Commands typed at any question: `:back`, `:reset`, `:quit`. An empty line
//! keeps the current answer. Multi-line answers end with a blank line.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::export::{download_filename, full_document};
use crate::generator::PageGenerator;
use crate::wizard::{InputKind, Phase, Question, Wizard, WizardError};

pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

enum Input {
    Text(String),
    Keep,
    Back,
    Reset,
    Quit,
}

/// Drive one wizard session. Returns the exported file path, or `None` if the user quit.
pub async fn run_wizard<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    generator: &PageGenerator,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    let mut wizard = Wizard::new();

    loop {
        match wizard.phase() {
            Phase::Hero => {
                writeln!(out, "Build a landing page in 60 seconds.")?;
                writeln!(
                    out,
                    "Answer {} quick questions. Press Enter to start.",
                    wizard.questions().len()
                )?;
                match read_line(input)? {
                    None => return Ok(None),
                    Some(line) if line.trim() == ":quit" => return Ok(None),
                    Some(_) => wizard.start(),
                }
            }
            Phase::Collecting(index) => {
                let Some(question) = wizard.current_question().cloned() else {
                    break;
                };
                render_question(out, &wizard, index, &question)?;

                match read_answer(input, &question)? {
                    Input::Quit => return Ok(None),
                    Input::Back => wizard.back(),
                    Input::Reset => wizard.reset(),
                    Input::Keep => advance(&mut wizard, out)?,
                    Input::Text(text) => {
                        wizard.answer(text);
                        advance(&mut wizard, out)?;
                    }
                }
            }
            Phase::Complete => {
                let data = wizard.form_data()?;
                writeln!(out, "Generating your landing page...")?;
                match generator.generate(&data).await {
                    Ok(page) => {
                        let path = out_dir.join(download_filename(&data.business_name));
                        std::fs::write(&path, full_document(&page, &data.business_name))?;
                        writeln!(out, "Saved {}", path.display())?;
                        return Ok(Some(path));
                    }
                    Err(e) => {
                        warn!("Generation failed: {:?}", e.cause());
                        writeln!(out, "{RETRY_MESSAGE}")?;
                        wizard.reopen();
                    }
                }
            }
        }
    }

    Ok(None)
}

fn advance<W: Write>(wizard: &mut Wizard, out: &mut W) -> Result<()> {
    match wizard.next() {
        Ok(phase) => {
            debug!("wizard advanced to {:?}", phase);
            Ok(())
        }
        Err(WizardError::InputIncomplete { .. }) => {
            writeln!(out, "Please enter an answer to continue.")?;
            Ok(())
        }
        Err(WizardError::InvalidChoice { value, .. }) => {
            writeln!(out, "'{value}' is not an option. Pick a number from the list.")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn render_question<W: Write>(
    out: &mut W,
    wizard: &Wizard,
    index: usize,
    question: &Question,
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {}  ({}%)",
        index + 1,
        wizard.questions().len(),
        wizard.progress_percent()
    )?;
    writeln!(out, "{}", question.prompt)?;
    if let Some(placeholder) = question.placeholder {
        writeln!(out, "  {placeholder}")?;
    }
    for (i, (value, label)) in question.options.iter().enumerate() {
        let marker = if wizard.current_answer() == Some(*value) { "*" } else { " " };
        writeln!(out, " {marker}{}. {label}", i + 1)?;
    }
    if let Some(current) = wizard.current_answer().filter(|a| !a.trim().is_empty()) {
        writeln!(out, "  [current: {current}]")?;
    }
    if question.kind == InputKind::MultiLine {
        writeln!(out, "  (finish with a blank line)")?;
    }
    out.flush()?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_answer<R: BufRead>(input: &mut R, question: &Question) -> Result<Input> {
    let Some(first) = read_line(input)? else {
        return Ok(Input::Quit);
    };

    match first.trim() {
        ":quit" => return Ok(Input::Quit),
        ":back" => return Ok(Input::Back),
        ":reset" => return Ok(Input::Reset),
        "" => return Ok(Input::Keep),
        _ => {}
    }

    match question.kind {
        InputKind::SingleLine => Ok(Input::Text(first)),
        InputKind::MultiLine => {
            let mut lines = vec![first];
            while let Some(line) = read_line(input)? {
                if line.trim().is_empty() {
                    break;
                }
                lines.push(line);
            }
            Ok(Input::Text(lines.join("\n")))
        }
        InputKind::SingleChoice => {
            let choice = first.trim();
            let value = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| question.options.get(i))
                .map(|(value, _)| value.to_string())
                .unwrap_or_else(|| choice.to_lowercase());
            Ok(Input::Text(value))
        }
    }
}
