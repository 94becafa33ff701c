use crate::{Real, Vector};

/// Errors returned by the orthonormalization and checking functions.
///
/// All vector indices are 1-based, matching how the vectors are presented to a user.
///
/// None of these errors are transient: calling the same function with the same input will fail in
/// the same way. A caller that wants a partial basis has to retry with a prefix of the input that
/// ends before the failing vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A vector's length differs from that of the first vector in the set.
    #[error("vector {index} has {len} dimensions (expected {expected})")]
    DimensionMismatch {
        index: usize,
        len: usize,
        expected: usize,
    },

    /// After removing its projections onto the previous basis vectors, the residual of a vector
    /// was shorter than the tolerance.
    #[error("linear dependence detected at vector {index}")]
    LinearDependence { index: usize },

    /// A vector contains `NaN` or infinite elements.
    #[error("vector {index} contains non-finite values")]
    NonFinite { index: usize },

    /// The residual of a finite vector could not be computed without overflowing.
    #[error("vector {index} is too large to be orthonormalized")]
    Overflow { index: usize },

    /// No vectors were given.
    #[error("no input vectors")]
    Empty,

    /// The vectors have no elements.
    #[error("input vectors have zero dimensions")]
    ZeroDimension,

    /// The tolerance was zero, negative, or not finite.
    #[error("tolerance must be positive and finite")]
    InvalidTolerance,
}

/// Returns the common length of all `vectors`, or `None` if there are none.
pub(crate) fn common_dimension<T>(vectors: &[Vector<T>]) -> Result<Option<usize>, Error> {
    let Some(first) = vectors.first() else {
        return Ok(None);
    };

    let expected = first.len();
    for (i, vector) in vectors.iter().enumerate().skip(1) {
        if vector.len() != expected {
            return Err(Error::DimensionMismatch {
                index: i + 1,
                len: vector.len(),
                expected,
            });
        }
    }

    Ok(Some(expected))
}

pub(crate) fn check_tolerance<T: Real>(tolerance: T) -> Result<(), Error> {
    if tolerance.is_finite() && tolerance > T::ZERO {
        Ok(())
    } else {
        Err(Error::InvalidTolerance)
    }
}
