//! Reading user input.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use orthonorm_linalg::Vector;

/// A line of user input that could not be interpreted.
///
/// These errors are shown to the user, who is then asked again or told how to fix the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),
    #[error("dimensions must be positive integers")]
    NotPositive,
    #[error("expected {expected} values, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// Writes prompts to an output and reads the answers line by line from an input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writes `prompt` (without a trailing newline) and returns the next line of input, without
    /// its line terminator.
    ///
    /// Returns an error if the input ends before a line could be read.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<&str> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        let n = self
            .input
            .read_line(&mut self.line)
            .context("failed to read input")?;
        if n == 0 {
            bail!("unexpected end of input");
        }
        Ok(self.line.trim_end_matches(&['\r', '\n'][..]))
    }

    /// Returns the output prompts are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Parses a vector count or dimension, which is checked with [`positive`] once both are known.
pub fn parse_integer(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    s.parse()
        .map_err(|_| InputError::NotAnInteger(s.to_string()))
}

/// Checks that a vector count or dimension is positive.
pub fn positive(value: i64) -> Result<usize, InputError> {
    if value <= 0 {
        return Err(InputError::NotPositive);
    }
    usize::try_from(value).map_err(|_| InputError::NotAnInteger(value.to_string()))
}

/// Parses a line of exactly `dim` whitespace-separated numbers into a [`Vector`].
///
/// Integers are accepted and promoted to floating point.
pub fn parse_vector(line: &str, dim: usize) -> Result<Vector<f64>, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != dim {
        return Err(InputError::WrongCount {
            expected: dim,
            got: fields.len(),
        });
    }

    fields
        .into_iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|_| InputError::NotANumber(field.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Vector::from)
}
