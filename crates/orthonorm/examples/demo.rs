//! Checks a few vector sets for orthonormality, then orthonormalizes one of them.

use std::io::{self, Write};

use orthonorm::report;
use orthonorm_linalg::{is_orthonormal, orthogonalize, Vector};

fn main() -> anyhow::Result<()> {
    orthonorm::init_logger!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let separator = "-".repeat(50);

    let standard = [
        Vector::<f64>::promote([1, 0, 0]),
        Vector::promote([0, 1, 0]),
        Vector::promote([0, 0, 1]),
    ];
    writeln!(out, "Standard basis")?;
    writeln!(out, "Is orthonormal? {}", is_orthonormal(&standard)?)?;
    writeln!(out, "{separator}")?;

    let h = 0.5f64.sqrt();
    let rotated = [
        Vector::from(vec![h, h, 0.0]),
        Vector::from(vec![-h, h, 0.0]),
        Vector::from(vec![0.0, 0.0, 1.0]),
    ];
    writeln!(out, "Rotated orthonormal set")?;
    writeln!(out, "Is orthonormal? {}", is_orthonormal(&rotated)?)?;
    writeln!(out, "{separator}")?;

    let integers = [
        Vector::<f64>::promote([1, 1, 0]),
        Vector::promote([1, 0, 1]),
        Vector::promote([0, 1, 1]),
    ];
    writeln!(out, "Integer input")?;
    writeln!(out, "Is orthonormal? {}", is_orthonormal(&integers)?)?;

    let basis = match orthogonalize(&integers) {
        Ok(basis) => basis,
        Err(e) => {
            log::error!("{e}");
            return Ok(());
        }
    };
    log::info!("computed {} basis vectors", basis.len());

    writeln!(out, "\nGram-Schmidt result:")?;
    report::write_basis(&mut out, &basis)?;
    writeln!(
        out,
        "\nResult orthonormal? {}",
        is_orthonormal(basis.as_slice())?
    )?;

    writeln!(out, "\nVerification:")?;
    report::write_verification(&mut out, &basis.verify())?;

    Ok(())
}
