use std::{fmt, ops};

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point types that orthonormalization can be performed with.
///
/// This is implemented for [`f32`] and [`f64`]. All computations of this library are carried out
/// in the precision of the chosen type; integer input has to be converted first (see
/// [`Vector::promote`][crate::Vector::promote]).
pub trait Real:
    Number
    + Sqrt
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
{
    /// Tolerance used when the caller does not specify one.
    ///
    /// A residual vector whose norm falls below this value is considered to be linearly dependent
    /// on the previous vectors, and norms and dot products that are within this distance of 1 and
    /// 0 respectively are considered orthonormal.
    const DEFAULT_TOLERANCE: Self;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns `true` if `self` is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;
}

macro_rules! float_impls {
    ($($ty:ty => $tol:expr),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Real for $ty {
                const DEFAULT_TOLERANCE: Self = $tol;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

// `1e-10` is far below single-precision rounding error, so `f32` gets a coarser default.
float_impls!(f32 => 1e-5, f64 => 1e-10);
