//! Prompt-driven card creation for the `custom` command

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::command::{coerce_int, stat_overrides};
use crate::error::GenerateError;
use crate::Generator;

/// Errors that can occur during an interactive session
#[derive(Debug, Error)]
pub enum InteractiveError {
    /// Reading answers or writing prompts failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Card generation failed
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Answers collected from the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAnswers {
    pub name: String,
    pub template: String,
    pub cost: Option<i64>,
    pub attack_strength: Option<i64>,
    pub defense: Option<i64>,
}

/// Ask for name, template, and the three stats, in that order.
///
/// End of input counts as a blank answer. Blank stats keep the template
/// default; anything else is read as an integer (non-numeric input is 0).
pub fn prompt_answers<R: BufRead, W: Write>(
    generator: &Generator,
    input: &mut R,
    output: &mut W,
) -> io::Result<CustomAnswers> {
    writeln!(output, "=== Custom Card Generator ===")?;
    let name = ask(input, output, "Card name: ")?;

    writeln!(output)?;
    write!(output, "{}", generator.registry().listing())?;
    let template = ask(input, output, "\nChoose template: ")?;

    let cost = ask_stat(input, output, "Cost (default from template): ")?;
    let attack_strength = ask_stat(input, output, "Attack strength (default from template): ")?;
    let defense = ask_stat(input, output, "Defense (default from template): ")?;

    Ok(CustomAnswers {
        name,
        template,
        cost,
        attack_strength,
        defense,
    })
}

/// Run the full session: prompt, then generate the card
pub fn run_custom<R: BufRead, W: Write>(
    generator: &Generator,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, InteractiveError> {
    let answers = prompt_answers(generator, input, output)?;
    let overrides = stat_overrides(answers.cost, answers.attack_strength, answers.defense);
    let path = generator.generate(&answers.name, &answers.template, &overrides)?;
    Ok(path)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}

fn ask_stat<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    let answer = ask(input, output, prompt)?;
    Ok((!answer.is_empty()).then(|| coerce_int(&answer)))
}
