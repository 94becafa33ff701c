//! Session configuration.

use std::env;

use anyhow::{bail, Context};
use orthonorm_linalg::Real;

/// Name of the environment variable that overrides the tolerance.
pub const TOLERANCE_VAR: &str = "ORTHONORM_TOLERANCE";

/// Configuration of an interactive session.
///
/// Created with [`Config::default`] or [`Config::from_env`], and adjusted with builder-style
/// methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: f64::DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Reads the configuration from the environment variables documented at the crate root.
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        match env::var(TOLERANCE_VAR) {
            Ok(value) => {
                config.tolerance = parse_tolerance(&value)
                    .with_context(|| format!("invalid value for `{TOLERANCE_VAR}`"))?;
            }
            Err(env::VarError::NotPresent) => {}
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read `{TOLERANCE_VAR}`"));
            }
        }
        Ok(config)
    }

    /// Sets the tolerance for linear dependence detection and verification.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the configured tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

fn parse_tolerance(value: &str) -> anyhow::Result<f64> {
    let tolerance: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("`{value}` is not a number"))?;
    if !tolerance.is_finite() || tolerance <= 0.0 {
        bail!("tolerance must be positive and finite, got {tolerance}");
    }
    Ok(tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Config::default().tolerance(), 1e-10);
        assert_eq!(Config::default().with_tolerance(1e-6).tolerance(), 1e-6);
    }

    #[test]
    fn parse() {
        assert_eq!(parse_tolerance("1e-8").unwrap(), 1e-8);
        assert_eq!(parse_tolerance(" 0.001\n").unwrap(), 0.001);

        assert!(parse_tolerance("").is_err());
        assert!(parse_tolerance("tiny").is_err());
        assert!(parse_tolerance("0").is_err());
        assert!(parse_tolerance("-1e-10").is_err());
        assert!(parse_tolerance("inf").is_err());
        assert!(parse_tolerance("NaN").is_err());
    }
}
