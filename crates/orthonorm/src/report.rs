//! Printing of results.

use std::io::{self, Write};

use itertools::Itertools;
use orthonorm_linalg::{OrthonormalBasis, Verification};

use crate::num::{Fixed, Sci};

const RULE_WIDTH: usize = 50;

/// Decimal places of the printed basis vector components.
const COMPONENT_DECIMALS: usize = 4;
/// Decimal places of the printed norms and dot products.
const CHECK_DECIMALS: usize = 6;

const PASS: &str = "✅";
const FAIL: &str = "❌";

/// Writes `lines` framed by horizontal rules.
pub fn write_header<W: Write>(out: &mut W, lines: &[&str]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{rule}")
}

/// Writes each basis vector on its own line, as `e<i> = [x, y, ...]`.
pub fn write_basis<W: Write>(out: &mut W, basis: &OrthonormalBasis<f64>) -> io::Result<()> {
    for (i, vector) in basis.iter().enumerate() {
        let components = vector
            .iter()
            .map(|&x| Fixed(x, COMPONENT_DECIMALS))
            .format(", ");
        writeln!(out, "e{} = [{}]", i + 1, components)?;
    }
    Ok(())
}

/// Writes one line per norm check and one line per dot product check, each followed by a
/// pass/fail mark.
pub fn write_verification<W: Write>(out: &mut W, report: &Verification<f64>) -> io::Result<()> {
    for check in report.norms() {
        writeln!(
            out,
            "||e{}|| = {} {}",
            check.index,
            Fixed(check.norm, CHECK_DECIMALS),
            mark(check.passed),
        )?;
    }
    for check in report.dots() {
        writeln!(
            out,
            "e{} • e{} = {} {}",
            check.left,
            check.right,
            Sci(check.dot, CHECK_DECIMALS),
            mark(check.passed),
        )?;
    }
    Ok(())
}

fn mark(passed: bool) -> &'static str {
    if passed {
        PASS
    } else {
        FAIL
    }
}
