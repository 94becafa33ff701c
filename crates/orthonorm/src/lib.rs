//! Interactive orthonormal basis calculator.
//!
//! This crate wraps the numeric core in [`orthonorm_linalg`] with a terminal session: it asks for
//! a set of vectors, computes an orthonormal basis of their span with the Modified Gram-Schmidt
//! process, and prints the basis together with a verification of every norm and every pairwise
//! dot product.
//!
//! The session is implemented by [`shell::run`], which works with any [`BufRead`] input and
//! [`Write`] output, so it can be driven from tests just like from a terminal.
//!
//! # Environment Variables
//!
//! * `ORTHONORM_TOLERANCE`: Overrides the tolerance used for linear dependence detection and for
//!   the verification. Must be a positive, finite number. Defaults to `1e-10`.
//! * `RUST_LOG`: Overrides the log filter set up by [`init_logger!`], using the syntax of the
//!   [env_logger] crate. Log output goes to *stderr* and does not mix with the session.
//!
//! [`BufRead`]: std::io::BufRead
//! [`Write`]: std::io::Write
//! [env_logger]: https://docs.rs/env_logger

use log::LevelFilter;

pub mod config;
pub mod num;
pub mod prompt;
pub mod report;
pub mod shell;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *debug*
/// level. Otherwise, they will log at *info* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
