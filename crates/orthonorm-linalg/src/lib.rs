//! Orthonormalization of vector sets.
//!
//! This library turns an ordered set of linearly independent vectors into an orthonormal basis of
//! their span, using the *Modified Gram-Schmidt* process, and checks whether a set of vectors is
//! orthonormal.
//!
//! # Overview
//!
//! - [`Vector`] is a dynamically sized vector of real numbers. Integer data can be brought in via
//!   [`Vector::promote`], which converts every element to floating point before any arithmetic
//!   happens.
//! - [`orthogonalize`] and [`orthogonalize_within`] compute an [`OrthonormalBasis`], or fail with
//!   an [`Error`] if the input is malformed or linearly dependent.
//! - [`is_orthonormal`] and [`is_orthonormal_within`] check a vector set for unit norms and
//!   pairwise orthogonality.
//! - [`verify`] produces a full [`Verification`] of every norm and every pairwise dot product,
//!   for display purposes.
//!
//! All operations are pure functions: they do not perform I/O, do not log, and do not share any
//! state, so they can be called from any number of threads at once.
//!
//! # Precision
//!
//! Everything is generic over the element type via the [`Real`] trait, which is implemented for
//! [`f32`] and [`f64`]. The default tolerance is [`Real::DEFAULT_TOLERANCE`] (`1e-10` for
//! [`f64`]).
//!
//! # Examples
//!
//! ```
//! use orthonorm_linalg::*;
//!
//! let vectors = [
//!     Vector::<f64>::promote([1, 1, 0]),
//!     Vector::promote([1, 0, 1]),
//!     Vector::promote([0, 1, 1]),
//! ];
//! assert!(!is_orthonormal(&vectors)?);
//!
//! let basis = orthogonalize(&vectors)?;
//! assert_eq!(basis.len(), 3);
//! assert!(is_orthonormal(basis.as_slice())?);
//! # Ok::<_, orthonorm_linalg::Error>(())
//! ```

mod check;
mod error;
mod gram_schmidt;
mod traits;
mod vector;

pub use check::*;
pub use error::*;
pub use gram_schmidt::*;
pub use traits::*;
pub use vector::*;
