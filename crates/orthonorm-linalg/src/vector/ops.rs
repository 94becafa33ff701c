//! Implementations of `std::ops`.

use std::ops::{Add, Div, Index, Mul};

use super::{assert_same_len, Vector};

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.0 == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == other[..]
    }
}

/// Element-wise addition.
impl<T> Add<Vector<T>> for Vector<T>
where
    T: Add,
{
    type Output = Vector<T::Output>;

    #[track_caller]
    fn add(self, rhs: Vector<T>) -> Self::Output {
        assert_same_len(self.len(), rhs.len());
        self.0.into_iter().zip(rhs.0).map(|(l, r)| l + r).collect()
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T> Mul<T> for Vector<T>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<T> Div<T> for Vector<T>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}
