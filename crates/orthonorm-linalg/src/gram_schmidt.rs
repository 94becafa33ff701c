//! Implements the [Modified Gram-Schmidt] process.
//!
//! [Modified Gram-Schmidt]: https://en.wikipedia.org/wiki/Gram%E2%80%93Schmidt_process#Numerical_stability

use std::{ops::Index, slice};

use crate::{
    check::{verify_unchecked, Verification},
    error::{check_tolerance, common_dimension},
    Error, Real, Vector,
};

/// An orthonormal set of vectors produced by [`orthogonalize`] or [`orthogonalize_within`].
///
/// Every vector has unit length and every pair of vectors has a vanishing dot product, both up to
/// the [tolerance][OrthonormalBasis::tolerance] the basis was computed with. The basis vectors are
/// in the same order as the input vectors they were derived from, and cannot be modified.
#[derive(Debug, Clone)]
pub struct OrthonormalBasis<T> {
    vectors: Vec<Vector<T>>,
    tolerance: T,
}

impl<T> OrthonormalBasis<T> {
    /// Returns the number of vectors in the basis.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if the basis contains no vectors.
    ///
    /// A basis returned by [`orthogonalize`] always contains at least one vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns the dimension of the space the basis vectors live in.
    pub fn dimension(&self) -> usize {
        self.vectors.first().map_or(0, Vector::len)
    }

    /// Returns the tolerance that was used to compute this basis.
    pub fn tolerance(&self) -> T
    where
        T: Copy,
    {
        self.tolerance
    }

    /// Returns the basis vectors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Vector<T>] {
        &self.vectors
    }

    /// Returns an iterator over the basis vectors.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Vector<T>> {
        self.vectors.iter()
    }

    /// Converts this basis into its list of vectors.
    pub fn into_vectors(self) -> Vec<Vector<T>> {
        self.vectors
    }

    /// Computes the norms and pairwise dot products of the basis vectors, and checks them against
    /// the tolerance the basis was computed with.
    pub fn verify(&self) -> Verification<T>
    where
        T: Real,
    {
        verify_unchecked(&self.vectors, self.tolerance)
    }
}

impl<T> Index<usize> for OrthonormalBasis<T> {
    type Output = Vector<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vectors[index]
    }
}

impl<'a, T> IntoIterator for &'a OrthonormalBasis<T> {
    type Item = &'a Vector<T>;
    type IntoIter = slice::Iter<'a, Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// Computes an orthonormal basis of the span of `vectors`, using [`Real::DEFAULT_TOLERANCE`].
///
/// See [`orthogonalize_within`] for details.
///
/// # Examples
///
/// ```
/// # use approx::assert_abs_diff_eq;
/// # use orthonorm_linalg::*;
/// let basis = orthogonalize(&[
///     Vector::<f64>::promote([3, 4]),
///     Vector::promote([1, 0]),
/// ])?;
/// assert_abs_diff_eq!(basis[0].as_slice(), &[0.6, 0.8][..], epsilon = 1e-12);
/// assert_abs_diff_eq!(basis[1].as_slice(), &[0.8, -0.6][..], epsilon = 1e-12);
/// # Ok::<_, orthonorm_linalg::Error>(())
/// ```
pub fn orthogonalize<T: Real>(vectors: &[Vector<T>]) -> Result<OrthonormalBasis<T>, Error> {
    orthogonalize_within(vectors, T::DEFAULT_TOLERANCE)
}

/// Computes an orthonormal basis of the span of `vectors` using the Modified Gram-Schmidt
/// process.
///
/// The vectors are processed in order. Each one has its components along all previously computed
/// basis vectors removed, one basis vector at a time, each projection being taken of the already
/// reduced residual. The residual is then normalized and appended to the basis. The first vector
/// is therefore only normalized, and the result depends on the order of `vectors` (only the span
/// does not).
///
/// # Errors
///
/// - [`Error::InvalidTolerance`] if `tolerance` is not a positive, finite number.
/// - [`Error::Empty`] if `vectors` is empty.
/// - [`Error::DimensionMismatch`] if the vectors do not all have the same length.
/// - [`Error::ZeroDimension`] if the vectors have no elements.
/// - [`Error::NonFinite`] if a vector contains infinite or `NaN` values. All vectors are checked
///   for this before any of them is processed.
/// - [`Error::Overflow`] if the residual of a vector cannot be represented, which only happens for
///   elements close to the largest finite value of `T`.
/// - [`Error::LinearDependence`] if the residual of a vector is shorter than `tolerance`, which
///   means that the vector is (numerically) a linear combination of the ones before it. This is
///   always the case when there are more vectors than dimensions.
///
/// No partial basis is returned in any of these cases.
pub fn orthogonalize_within<T: Real>(
    vectors: &[Vector<T>],
    tolerance: T,
) -> Result<OrthonormalBasis<T>, Error> {
    check_tolerance(tolerance)?;
    match common_dimension(vectors)? {
        None => return Err(Error::Empty),
        Some(0) => return Err(Error::ZeroDimension),
        Some(_) => {}
    }
    if let Some(i) = vectors
        .iter()
        .position(|v| v.iter().any(|x| !x.is_finite()))
    {
        return Err(Error::NonFinite { index: i + 1 });
    }

    let mut basis: Vec<Vector<T>> = Vec::with_capacity(vectors.len());
    for (i, vector) in vectors.iter().enumerate() {
        let index = i + 1;

        let mut residual = vector.clone();
        for unit in &basis {
            let projection = residual.dot(unit);
            residual.sub_scaled(unit, projection);
        }

        let norm = residual.length();
        if !norm.is_finite() {
            return Err(Error::Overflow { index });
        }
        if norm < tolerance {
            return Err(Error::LinearDependence { index });
        }

        basis.push(residual / norm);
    }

    Ok(OrthonormalBasis {
        vectors: basis,
        tolerance,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::is_orthonormal;

    use super::*;

    fn promote<const N: usize>(rows: &[[i32; N]]) -> Vec<Vector<f64>> {
        rows.iter().map(|row| Vector::promote(*row)).collect()
    }

    #[test]
    fn standard_basis_is_unchanged() {
        let input = promote(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let basis = orthogonalize(&input).unwrap();

        assert_eq!(basis.len(), 3);
        assert_eq!(basis.dimension(), 3);
        for (out, inp) in basis.iter().zip(&input) {
            assert_abs_diff_eq!(out.as_slice(), inp.as_slice(), epsilon = 1e-10);
        }
    }

    #[test]
    fn integer_input() {
        let input = promote(&[[1, 1, 0], [1, 0, 1], [0, 1, 1]]);
        let basis = orthogonalize(&input).unwrap();

        let s2 = 2.0f64.sqrt();
        let s6 = 6.0f64.sqrt();
        let s3 = 3.0f64.sqrt();
        let expected: [&[f64]; 3] = [
            &[1.0 / s2, 1.0 / s2, 0.0],
            &[1.0 / s6, -1.0 / s6, 2.0 / s6],
            &[-1.0 / s3, 1.0 / s3, 1.0 / s3],
        ];
        for (e, expected) in basis.iter().zip(expected) {
            assert_abs_diff_eq!(e.as_slice(), expected, epsilon = 1e-6);
        }

        assert!(is_orthonormal(basis.as_slice()).unwrap());
    }

    #[test]
    fn input_is_not_modified() {
        let input = promote(&[[2, 0], [1, 1]]);
        let copy = input.clone();
        orthogonalize(&input).unwrap();
        assert_eq!(input[0], copy[0]);
        assert_eq!(input[1], copy[1]);
    }

    #[test]
    fn linear_dependence() {
        let input = promote(&[[1, 0], [2, 0]]);
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::LinearDependence { index: 2 }
        );

        let input = promote(&[[1, 2, 3], [0, 1, 0], [2, 5, 6]]);
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::LinearDependence { index: 3 }
        );

        // Zero vector up front.
        let input = promote(&[[0, 0], [1, 0]]);
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::LinearDependence { index: 1 }
        );
    }

    #[test]
    fn more_vectors_than_dimensions() {
        let input = promote(&[[1, 0], [0, 1], [1, 1]]);
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::LinearDependence { index: 3 }
        );
    }

    #[test]
    fn dimension_mismatch() {
        let input = vec![Vector::<f64>::promote([1, 0, 0]), Vector::promote([0, 1])];
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::DimensionMismatch {
                index: 2,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn degenerate_input() {
        assert_eq!(orthogonalize::<f64>(&[]).unwrap_err(), Error::Empty);
        assert_eq!(
            orthogonalize(&[Vector::<f64>::zeros(0)]).unwrap_err(),
            Error::ZeroDimension
        );
        assert_eq!(
            orthogonalize(&[Vector::from(vec![1.0, f64::NAN])]).unwrap_err(),
            Error::NonFinite { index: 1 }
        );
        assert_eq!(
            orthogonalize(&[Vector::from(vec![1.0, 0.0]), Vector::from(vec![f64::INFINITY, 1.0])])
                .unwrap_err(),
            Error::NonFinite { index: 2 }
        );
        // Non-finite input is reported even when an earlier vector is dependent.
        let input = vec![
            Vector::from(vec![1.0, 0.0]),
            Vector::from(vec![2.0, 0.0]),
            Vector::from(vec![0.0, f64::NEG_INFINITY]),
        ];
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::NonFinite { index: 3 }
        );
    }

    #[test]
    fn huge_elements() {
        let input = vec![
            Vector::from(vec![1e200, 1e200]),
            Vector::from(vec![1e200, -1e200]),
        ];
        let basis = orthogonalize(&input).unwrap();
        let h = 0.5f64.sqrt();
        assert_abs_diff_eq!(basis[0].as_slice(), &[h, h][..], epsilon = 1e-12);
        assert_abs_diff_eq!(basis[1].as_slice(), &[h, -h][..], epsilon = 1e-12);
        assert!(is_orthonormal(basis.as_slice()).unwrap());

        let input = vec![
            Vector::from(vec![1e-200, 0.0]),
            Vector::from(vec![1e-200, 1e-200]),
        ];
        assert_eq!(orthogonalize(&input).unwrap_err(), Error::LinearDependence { index: 1 });
        assert_eq!(orthogonalize_within(&input, 1e-250).unwrap().len(), 2);
    }

    #[test]
    fn overflow() {
        let input = vec![Vector::from(vec![f64::MAX, f64::MAX])];
        assert_eq!(
            orthogonalize(&input).unwrap_err(),
            Error::Overflow { index: 1 }
        );
    }

    #[test]
    fn tolerance() {
        let input = vec![
            Vector::from(vec![1.0, 0.0]),
            Vector::from(vec![1.0, 1e-6]),
        ];
        assert_eq!(orthogonalize(&input).unwrap().len(), 2);
        assert_eq!(
            orthogonalize_within(&input, 1e-3).unwrap_err(),
            Error::LinearDependence { index: 2 }
        );
        assert_eq!(
            orthogonalize_within(&input, 0.0).unwrap_err(),
            Error::InvalidTolerance
        );

        let basis = orthogonalize_within(&input, 1e-8).unwrap();
        assert_eq!(basis.tolerance(), 1e-8);
        assert_abs_diff_eq!(basis[1].as_slice(), &[0.0, 1.0][..], epsilon = 1e-8);
    }

    #[test]
    fn single_precision() {
        let input = vec![
            Vector::<f32>::promote([1i16, 1, 0]),
            Vector::promote([1i16, 0, 1]),
        ];
        let basis = orthogonalize(&input).unwrap();
        assert_eq!(basis.tolerance(), f32::DEFAULT_TOLERANCE);
        assert!(is_orthonormal(basis.as_slice()).unwrap());
    }

    #[test]
    fn modified_beats_classical() {
        // Nearly parallel columns, where Classical Gram-Schmidt loses orthogonality between the
        // last two basis vectors almost entirely.
        let eps = 1e-8;
        let input = vec![
            Vector::from(vec![1.0, eps, 0.0, 0.0]),
            Vector::from(vec![1.0, 0.0, eps, 0.0]),
            Vector::from(vec![1.0, 0.0, 0.0, eps]),
        ];
        let basis = orthogonalize_within(&input, 1e-12).unwrap();
        assert!(basis[1].dot(&basis[2]).abs() < 1e-7);
        assert_abs_diff_eq!(basis[2].length(), 1.0, epsilon = 1e-12);
    }
}
