// src/numerics/types/traits.rs
// Scalar trait and the shared container contract for the numerics types.

use crate::numerics::error::NumericsResult;

/// FloatingPoint is the scalar contract for the numerics types.
///
/// Note: we require Copy, PartialOrd and the basic arithmetic ops on Self,
/// plus the handful of functions that norms and transform builders need
/// (square root, trigonometry, degree conversion) and an epsilon used by
/// singularity and degeneracy tests.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Tolerance below which a magnitude or determinant counts as zero.
    fn epsilon() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn to_radians(self) -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn epsilon() -> Self { 1e-6 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn abs(self) -> Self { f32::abs(self) }
    fn sin(self) -> Self { f32::sin(self) }
    fn cos(self) -> Self { f32::cos(self) }
    fn tan(self) -> Self { f32::tan(self) }
    fn to_radians(self) -> Self { f32::to_radians(self) }
    fn from_f64(value: f64) -> Self { value as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn epsilon() -> Self { 1e-9 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn abs(self) -> Self { f64::abs(self) }
    fn sin(self) -> Self { f64::sin(self) }
    fn cos(self) -> Self { f64::cos(self) }
    fn tan(self) -> Self { f64::tan(self) }
    fn to_radians(self) -> Self { f64::to_radians(self) }
    fn from_f64(value: f64) -> Self { value }
    fn to_f64(self) -> f64 { self }
}

/// Shared contract every vector and matrix type satisfies.
///
/// Containers are fixed-length immutable value types: the element count is
/// fixed by the type, construction validates it once, and every operation
/// returns a fresh value instead of mutating an operand.
pub trait NumericContainer<T: FloatingPoint>: Sized {
    /// Total number of stored elements (rows x cols for matrices).
    const ELEMENTS: usize;

    /// Builds a container from a flat row-major slice of exactly
    /// `Self::ELEMENTS` values. Any other length fails with
    /// `InvalidArgument`; input is never padded or truncated.
    fn from_slice(values: &[T]) -> NumericsResult<Self>;

    /// Element at flat row-major position `index`.
    fn element(&self, index: usize) -> NumericsResult<T>;

    /// Flat row-major copy of all elements.
    fn elements(&self) -> Vec<T>;

    /// Multiplies every element by `factor`. Never fails.
    fn scalar(&self, factor: T) -> Self;
}
