//! Scalar element types supported by the decomposition kernels

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for scalar elements that support the factorization and solve kernels.
///
/// Implemented for `f32` and `f64`. The kernels only need basic arithmetic,
/// ordering for the pivot scan, and absolute value; everything else stays out
/// of the trait so that the bound reads at the call sites.
pub trait Element:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Additive identity
    fn zero() -> Self;
    /// Multiplicative identity
    fn one() -> Self;
    /// Convert from f64 (used for pivot signs and pivot indices)
    fn from_f64(v: f64) -> Self;
    /// Convert to f64
    fn to_f64(self) -> f64;
    /// Returns absolute value
    fn abs_val(self) -> Self;
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
}
