//! Orthonormality checks.

use crate::{
    error::{check_tolerance, common_dimension},
    Error, Real, Vector,
};

/// Checks whether `vectors` are orthonormal, using [`Real::DEFAULT_TOLERANCE`].
///
/// See [`is_orthonormal_within`] for details.
///
/// # Examples
///
/// ```
/// # use orthonorm_linalg::*;
/// let h = 0.5f64.sqrt();
/// let rotated = [
///     Vector::from(vec![h, h, 0.0]),
///     Vector::from(vec![-h, h, 0.0]),
///     Vector::from(vec![0.0, 0.0, 1.0]),
/// ];
/// assert!(is_orthonormal(&rotated)?);
/// # Ok::<_, orthonorm_linalg::Error>(())
/// ```
pub fn is_orthonormal<T: Real>(vectors: &[Vector<T>]) -> Result<bool, Error> {
    is_orthonormal_within(vectors, T::DEFAULT_TOLERANCE)
}

/// Checks whether `vectors` are orthonormal: every vector must have a length within `tolerance`
/// of 1, and every pair of vectors must have a dot product within `tolerance` of 0.
///
/// The checks stop at the first violation. An empty set is considered orthonormal.
///
/// # Errors
///
/// - [`Error::InvalidTolerance`] if `tolerance` is not a positive, finite number.
/// - [`Error::DimensionMismatch`] if the vectors do not all have the same length.
pub fn is_orthonormal_within<T: Real>(vectors: &[Vector<T>], tolerance: T) -> Result<bool, Error> {
    check_tolerance(tolerance)?;
    common_dimension(vectors)?;

    for (i, vi) in vectors.iter().enumerate() {
        if !within(vi.length() - T::ONE, tolerance) {
            return Ok(false);
        }

        for vj in &vectors[i + 1..] {
            if !within(vi.dot(vj), tolerance) {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// `NaN` is never within tolerance.
fn within<T: Real>(deviation: T, tolerance: T) -> bool {
    deviation.abs() <= tolerance
}

/// Result of checking the norm of a single vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormCheck<T> {
    /// 1-based index of the vector.
    pub index: usize,
    /// Euclidean length of the vector.
    pub norm: T,
    /// Whether the norm is within the tolerance of 1.
    pub passed: bool,
}

/// Result of checking the dot product of a pair of vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotCheck<T> {
    /// 1-based index of the first vector.
    pub left: usize,
    /// 1-based index of the second vector. Always greater than `left`.
    pub right: usize,
    /// Dot product of the two vectors.
    pub dot: T,
    /// Whether the dot product is within the tolerance of 0.
    pub passed: bool,
}

/// Every norm and every pairwise dot product of a vector set, checked against a tolerance.
///
/// Unlike [`is_orthonormal_within`], this does not stop at the first failure, which makes it
/// suitable for displaying a full report.
#[derive(Debug, Clone)]
pub struct Verification<T> {
    norms: Vec<NormCheck<T>>,
    dots: Vec<DotCheck<T>>,
    tolerance: T,
}

impl<T: Copy> Verification<T> {
    /// Returns the norm checks, one per vector, in input order.
    pub fn norms(&self) -> &[NormCheck<T>] {
        &self.norms
    }

    /// Returns the dot product checks, one per unordered pair, ordered by `(left, right)`.
    pub fn dots(&self) -> &[DotCheck<T>] {
        &self.dots
    }

    /// Returns the tolerance the checks were performed with.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Returns `true` if every check passed.
    pub fn passed(&self) -> bool {
        self.norms.iter().all(|c| c.passed) && self.dots.iter().all(|c| c.passed)
    }
}

/// Computes a [`Verification`] of `vectors` with the given `tolerance`.
///
/// # Errors
///
/// - [`Error::InvalidTolerance`] if `tolerance` is not a positive, finite number.
/// - [`Error::DimensionMismatch`] if the vectors do not all have the same length.
///
/// # Examples
///
/// ```
/// # use orthonorm_linalg::*;
/// let set = [Vector::from(vec![1.0, 0.0]), Vector::from(vec![1.0, 1.0])];
/// let report = verify(&set, 1e-10)?;
/// assert!(report.norms()[0].passed);
/// assert!(!report.norms()[1].passed);
/// assert_eq!(report.dots()[0].dot, 1.0);
/// assert!(!report.passed());
/// # Ok::<_, orthonorm_linalg::Error>(())
/// ```
pub fn verify<T: Real>(vectors: &[Vector<T>], tolerance: T) -> Result<Verification<T>, Error> {
    check_tolerance(tolerance)?;
    common_dimension(vectors)?;
    Ok(verify_unchecked(vectors, tolerance))
}

pub(crate) fn verify_unchecked<T: Real>(vectors: &[Vector<T>], tolerance: T) -> Verification<T> {
    let norms = vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let norm = v.length();
            NormCheck {
                index: i + 1,
                norm,
                passed: (norm - T::ONE).abs() < tolerance,
            }
        })
        .collect();

    let mut dots = Vec::with_capacity(vectors.len() * vectors.len().saturating_sub(1) / 2);
    for (i, vi) in vectors.iter().enumerate() {
        for (j, vj) in vectors.iter().enumerate().skip(i + 1) {
            let dot = vi.dot(vj);
            dots.push(DotCheck {
                left: i + 1,
                right: j + 1,
                dot,
                passed: dot.abs() < tolerance,
            });
        }
    }

    Verification {
        norms,
        dots,
        tolerance,
    }
}
