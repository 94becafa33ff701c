//! The interactive session.

use std::io::{BufRead, Write};

use orthonorm_linalg::orthogonalize_within;

use crate::{
    config::Config,
    prompt::{parse_integer, parse_vector, positive, InputError, Prompter},
    report,
};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The basis was computed and printed.
    Completed,
    /// The vector count or dimension was invalid.
    InvalidInput,
    /// The vectors could not be orthonormalized (eg. because they are linearly dependent).
    Failed,
}

/// Runs an interactive session, reading answers from `input` and writing prompts and results to
/// `output`.
///
/// Invalid answers are reported to the user. A malformed vector is asked for again, while an
/// invalid vector count or dimension, or vectors that cannot be orthonormalized, end the session
/// with the corresponding [`Outcome`].
///
/// Returns an error if reading or writing fails, or if `input` ends before all vectors were
/// entered.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> anyhow::Result<Outcome> {
    let mut prompter = Prompter::new(input, output);
    report::write_header(
        prompter.output(),
        &[
            "ORTHONORMAL SET CALCULATOR",
            "Using Modified Gram-Schmidt Orthogonalization",
        ],
    )?;

    let count = match parse_integer(prompter.ask("\nEnter number of vectors: ")?) {
        Ok(count) => count,
        Err(e) => return invalid_counts(prompter.output(), e),
    };
    let dim = match parse_integer(prompter.ask("Enter dimension of vectors: ")?) {
        Ok(dim) => dim,
        Err(e) => return invalid_counts(prompter.output(), e),
    };
    let (count, dim) = match (positive(count), positive(dim)) {
        (Ok(count), Ok(dim)) => (count, dim),
        (Err(e), _) | (_, Err(e)) => return invalid_counts(prompter.output(), e),
    };
    log::debug!("reading {count} vectors of dimension {dim}");

    if count > dim {
        let out = prompter.output();
        writeln!(
            out,
            "\nWARNING: More vectors than dimension suggests linear dependence!"
        )?;
        writeln!(out, "The process will fail if vectors are linearly dependent.")?;
    }

    writeln!(
        prompter.output(),
        "\nEnter vectors (space-separated values for each vector):"
    )?;
    let mut vectors = Vec::with_capacity(count);
    for i in 1..=count {
        loop {
            match parse_vector(prompter.ask(&format!("Vector {i}: "))?, dim) {
                Ok(vector) => {
                    vectors.push(vector);
                    break;
                }
                Err(e) => {
                    log::debug!("rejected vector {i}: {e}");
                    writeln!(prompter.output(), "  Invalid input: {e}. Try again.")?;
                }
            }
        }
    }

    let out = prompter.output();
    let basis = match orthogonalize_within(&vectors, config.tolerance()) {
        Ok(basis) => basis,
        Err(e) => {
            log::debug!("orthonormalization failed: {e:?}");
            writeln!(out, "\nERROR: {e}")?;
            return Ok(Outcome::Failed);
        }
    };

    writeln!(out)?;
    report::write_header(out, &["RESULTING ORTHONORMAL SET:"])?;
    report::write_basis(out, &basis)?;

    let verification = basis.verify();
    writeln!(out)?;
    report::write_header(out, &["VERIFICATION:"])?;
    report::write_verification(out, &verification)?;
    out.flush()?;

    if !verification.passed() {
        log::warn!(
            "computed basis failed verification with tolerance {}",
            config.tolerance()
        );
    }

    Ok(Outcome::Completed)
}

fn invalid_counts<W: Write>(out: &mut W, e: InputError) -> anyhow::Result<Outcome> {
    writeln!(out, "\nError: {e}. Please enter valid positive integers.")?;
    Ok(Outcome::InvalidInput)
}
