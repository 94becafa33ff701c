use std::{fmt, slice};

use crate::{traits::Number, Real, Zero};

mod ops;

/// A column vector storing elements of type `T`, with a length chosen at runtime.
///
/// # Construction
///
/// - Vectors can be created from [`Vec`]s using their [`From`] implementation, or collected from an
///   iterator.
/// - [`Vector::promote`] converts the elements while constructing the vector, which is how integer
///   input is brought into floating point.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::zeros`] creates a vector containing all-zeroes.
///
/// # Element Access
///
/// Elements can be accessed via indexing (`v[i]`), as a slice ([`Vector::as_slice`]), or by
/// iterating over `&Vector`.
///
/// # Arithmetic
///
/// Vectors support element-wise addition with other vectors of the same length, and
/// multiplication and division by a scalar. Operations involving two vectors panic if their
/// lengths differ; the orthonormalization functions validate their input so that this cannot
/// happen there.
#[derive(Clone, Default)]
pub struct Vector<T>(Vec<T>);

impl<T> Vector<T> {
    /// Creates a vector of length `len` where each element is initialized by invoking a closure
    /// with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 0.5);
    /// assert_eq!(v, [0.0, 0.5, 1.0]);
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self((0..len).map(cb).collect())
    }

    /// Creates a vector of length `len` with all elements set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// assert_eq!(Vector::<f32>::zeros(2), [0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self(vec![T::ZERO; len])
    }

    /// Creates a vector by converting each element of `elems` into `T`.
    ///
    /// This is the intended way of creating floating-point vectors from integer data: every
    /// element is converted before it takes part in any arithmetic, so no integer truncation can
    /// occur later on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// let v = Vector::<f64>::promote([1, 0, -3]);
    /// assert_eq!(v, [1.0, 0.0, -3.0]);
    /// assert_eq!(v / 2.0, [0.5, 0.0, -1.5]);
    /// ```
    pub fn promote<U, I>(elems: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        elems.into_iter().map(Into::into).collect()
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.into_iter().map(f).collect())
    }

    /// Returns the number of elements (the dimension) of this vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the elements of this vector.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `other` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// let a = Vector::<f64>::promote([1, 3, -5]);
    /// let b = Vector::<f64>::promote([4, -2, -1]);
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    #[track_caller]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Number,
    {
        assert_same_len(self.len(), other.len());
        self.iter()
            .zip(other)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the squared Euclidean length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the Euclidean length (the L2 norm) of this [`Vector`].
    ///
    /// The elements are divided by the largest magnitude before they are squared, so the result is
    /// finite whenever the length itself is representable, even if its square is not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// assert_eq!(Vector::from(vec![3.0, 4.0]).length(), 5.0);
    /// assert_eq!(Vector::from(vec![0.0, -1e200]).length(), 1e200);
    /// ```
    pub fn length(&self) -> T
    where
        T: Real,
    {
        let mut scale = T::ZERO;
        for &x in self {
            if !x.is_finite() {
                return self.length2().sqrt();
            }
            if x.abs() > scale {
                scale = x.abs();
            }
        }
        if scale == T::ZERO {
            return T::ZERO;
        }

        let sum = self.iter().fold(T::ZERO, |acc, &x| {
            let x = x / scale;
            acc + x * x
        });
        scale * sum.sqrt()
    }

    /// Subtracts `factor * other` from `self` in place.
    ///
    /// This removes the component of `self` along `other` when `other` is a unit vector and
    /// `factor` is `self.dot(other)`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `other` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orthonorm_linalg::*;
    /// let mut v = Vector::from(vec![2.0, 5.0]);
    /// let x = Vector::from(vec![1.0, 0.0]);
    /// v.sub_scaled(&x, v.dot(&x));
    /// assert_eq!(v, [0.0, 5.0]);
    /// ```
    #[track_caller]
    pub fn sub_scaled(&mut self, other: &Self, factor: T)
    where
        T: Number,
    {
        assert_same_len(self.len(), other.len());
        for (lhs, &rhs) in self.0.iter_mut().zip(other) {
            *lhs = *lhs - factor * rhs;
        }
    }
}

#[track_caller]
fn assert_same_len(a: usize, b: usize) {
    assert_eq!(a, b, "vector operation on operands of different lengths");
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> fmt::Debug for Vector<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn fmt() {
        let v = Vector::from(vec![0.0, 0.5, 1.0]);
        assert_eq!(format!("{:?}", v), "(0.0, 0.5, 1.0)");
    }

    #[test]
    fn promote() {
        let v = Vector::<f64>::promote([1u8, 2, 3]);
        assert_eq!(v, [1.0, 2.0, 3.0]);

        let v = Vector::<f32>::promote([-1i16, 7]);
        assert_eq!(v, [-1.0, 7.0]);

        // Integer division would truncate this to 0.
        let v = Vector::<f64>::promote([1, 2]) / 3.0;
        assert_abs_diff_eq!(v[0], 1.0 / 3.0);
    }

    #[test]
    fn dot() {
        let a = Vector::<f64>::promote([1, 3, -5]);
        let b = Vector::<f64>::promote([4, -2, -1]);
        assert_eq!(a.dot(&b), 3.0);
        assert_eq!(a.dot(&a), 35.0);
        assert_eq!(a.length2(), 35.0);
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn dot_length_mismatch() {
        let a = Vector::from(vec![1.0, 0.0]);
        let b = Vector::from(vec![1.0, 0.0, 0.0]);
        a.dot(&b);
    }

    #[test]
    fn length() {
        assert_eq!(Vector::from(vec![3.0f32, 4.0]).length(), 5.0);
        assert_eq!(Vector::<f64>::zeros(4).length(), 0.0);
        assert_abs_diff_eq!(Vector::from(vec![1.0, 1.0, 1.0]).length(), 3.0f64.sqrt());
        assert!(Vector::from(vec![1.0, f64::NAN]).length().is_nan());
        assert_eq!(Vector::from(vec![f64::INFINITY, 1.0]).length(), f64::INFINITY);
    }

    #[test]
    fn length_of_huge_and_tiny_vectors() {
        // Squaring these elements overflows or underflows.
        let v = Vector::from(vec![1e200f64, 1e200]);
        assert!(v.length2().is_infinite());
        assert_abs_diff_eq!(v.length() / 1e200, 2.0f64.sqrt(), epsilon = 1e-15);

        let v = Vector::from(vec![3e-200, 4e-200]);
        assert_eq!(v.length2(), 0.0);
        assert_abs_diff_eq!(v.length() / 1e-200, 5.0, epsilon = 1e-14);

        let v = Vector::from(vec![3e30f32, -4e30]);
        assert_abs_diff_eq!(v.length() / 1e30, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn sub_scaled() {
        let mut v = Vector::from(vec![1.0, 1.0, 0.0]);
        let u = Vector::from(vec![1.0, 0.0, 0.0]);
        let p = v.dot(&u);
        v.sub_scaled(&u, p);
        assert_eq!(v, [0.0, 1.0, 0.0]);
        assert_eq!(v.dot(&u), 0.0);
    }
}
