// src/numerics/types/vector.rs
// Fixed-dimension vector types (2, 3, 4 components) with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};

use crate::numerics::error::{NumericsError, NumericsResult};

use super::matrix::Matrix;
use super::traits::{FloatingPoint, NumericContainer};

/// Vector2 is a 2D vector with a template-able numeric type.
///
/// The dimension is part of the type: operations between vectors of
/// different dimension do not exist, only the explicit conversions below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
}

/// Vector3 is a 3D vector with a template-able numeric type.
///
/// This is the workhorse type of the core: positions, directions, rotation
/// axes and the translate/scale/look-at factory inputs are all Vector3.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Vector4 is a 4D vector, the homogeneous-coordinate companion of Vector3.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Conditional impls for serde. Vectors serialize as plain tuples.

impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T> Serialize for Vector4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

// ---------------------------------------------------------------------------
// Vector2
// ---------------------------------------------------------------------------

impl<T: FloatingPoint> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Elementwise product with `other`.
    pub fn hadamard_product(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Elementwise quotient. A zero divisor component follows IEEE-754
    /// (infinity or NaN); shapes are checked by the type, values are not.
    pub fn divide(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    pub fn dot_product(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// The cross product is only defined for 3-dimensional vectors; calling
    /// it here is reported as an error rather than defined away, so the
    /// container surface stays uniform across dimensions.
    pub fn cross_product(&self, _other: &Self) -> NumericsResult<Self> {
        Err(NumericsError::UnsupportedOperation(
            "cross product is only defined for 3-dimensional vectors".into(),
        ))
    }

    pub fn magnitude(&self) -> T {
        self.dot_product(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself; use [`Vector2::try_normalize`] to treat that as an error.
    pub fn normalize(&self) -> Self {
        match self.try_normalize() {
            Ok(unit) => unit,
            Err(_) => Self::zero(),
        }
    }

    /// Strict normalization: fails with `DegenerateVector` when the
    /// magnitude is zero (within epsilon).
    pub fn try_normalize(&self) -> NumericsResult<Self> {
        let m = self.magnitude();
        if m.abs() <= T::epsilon() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(Self::new(self.x / m, self.y / m))
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Additive inverse (all components negated).
    pub fn inverse(&self) -> Self {
        -*self
    }

    /// Applies `matrix` to this vector, returning matrix * self.
    pub fn transform(&self, matrix: &Matrix<T, 2, 2>) -> Self {
        matrix.transform(self)
    }

    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }
}

impl<T: FloatingPoint> NumericContainer<T> for Vector2<T> {
    const ELEMENTS: usize = 2;

    fn from_slice(values: &[T]) -> NumericsResult<Self> {
        if values.len() != Self::ELEMENTS {
            return Err(NumericsError::InvalidArgument(format!(
                "Vector2 requires exactly {} values, got {}",
                Self::ELEMENTS,
                values.len()
            )));
        }
        Ok(Self::new(values[0], values[1]))
    }

    fn element(&self, index: usize) -> NumericsResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(NumericsError::InvalidArgument(format!(
                "element index {index} out of range for Vector2"
            ))),
        }
    }

    fn elements(&self) -> Vec<T> {
        vec![self.x, self.y]
    }

    fn scalar(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// ---------------------------------------------------------------------------
// Vector3
// ---------------------------------------------------------------------------

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// World-space up, +Y.
    pub fn up() -> Self {
        Self::unit_y()
    }

    pub fn down() -> Self {
        -Self::unit_y()
    }

    /// World-space right, +X.
    pub fn right() -> Self {
        Self::unit_x()
    }

    pub fn left() -> Self {
        -Self::unit_x()
    }

    /// Elementwise (Hadamard) product with `other`.
    pub fn hadamard_product(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Elementwise quotient. A zero divisor component follows IEEE-754
    /// (infinity or NaN); shapes are checked by the type, values are not.
    pub fn divide(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Scalar product, sum of the componentwise products.
    pub fn dot_product(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-hand-rule cross product. Infallible for 3-dimensional vectors;
    /// returns a Result so the surface matches the other dimensions.
    pub fn cross_product(&self, other: &Self) -> NumericsResult<Self> {
        Ok(Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        self.dot_product(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself, which is the documented degenerate case; use
    /// [`Vector3::try_normalize`] to treat it as an error instead.
    pub fn normalize(&self) -> Self {
        match self.try_normalize() {
            Ok(unit) => unit,
            Err(_) => Self::zero(),
        }
    }

    /// Strict normalization: fails with `DegenerateVector` when the
    /// magnitude is zero (within epsilon).
    pub fn try_normalize(&self) -> NumericsResult<Self> {
        let m = self.magnitude();
        if m.abs() <= T::epsilon() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(Self::new(self.x / m, self.y / m, self.z / m))
    }

    /// Euclidean distance to `other`, sqrt of the sum of squared
    /// componentwise differences.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Additive inverse (all components negated).
    pub fn inverse(&self) -> Self {
        -*self
    }

    /// Applies `matrix` to this vector, returning matrix * self.
    pub fn transform(&self, matrix: &Matrix<T, 3, 3>) -> Self {
        matrix.transform(self)
    }

    /// True when every component is strictly less than its counterpart.
    ///
    /// These predicates replace ordering operators: they are deterministic
    /// elementwise all-satisfy comparisons with no geometric meaning.
    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }
}

impl<T: FloatingPoint> NumericContainer<T> for Vector3<T> {
    const ELEMENTS: usize = 3;

    fn from_slice(values: &[T]) -> NumericsResult<Self> {
        if values.len() != Self::ELEMENTS {
            return Err(NumericsError::InvalidArgument(format!(
                "Vector3 requires exactly {} values, got {}",
                Self::ELEMENTS,
                values.len()
            )));
        }
        Ok(Self::new(values[0], values[1], values[2]))
    }

    fn element(&self, index: usize) -> NumericsResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(NumericsError::InvalidArgument(format!(
                "element index {index} out of range for Vector3"
            ))),
        }
    }

    fn elements(&self) -> Vec<T> {
        vec![self.x, self.y, self.z]
    }

    fn scalar(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// ---------------------------------------------------------------------------
// Vector4
// ---------------------------------------------------------------------------

impl<T: FloatingPoint> Vector4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Homogeneous point: (x, y, z, 1).
    pub fn from_point(point: Vector3<T>) -> Self {
        Self::new(point.x, point.y, point.z, T::one())
    }

    pub fn hadamard_product(&self, other: &Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    pub fn divide(&self, other: &Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    pub fn dot_product(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// See [`Vector2::cross_product`]: undefined for this dimension.
    pub fn cross_product(&self, _other: &Self) -> NumericsResult<Self> {
        Err(NumericsError::UnsupportedOperation(
            "cross product is only defined for 3-dimensional vectors".into(),
        ))
    }

    pub fn magnitude(&self) -> T {
        self.dot_product(self).sqrt()
    }

    pub fn normalize(&self) -> Self {
        match self.try_normalize() {
            Ok(unit) => unit,
            Err(_) => Self::zero(),
        }
    }

    pub fn try_normalize(&self) -> NumericsResult<Self> {
        let m = self.magnitude();
        if m.abs() <= T::epsilon() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(Self::new(self.x / m, self.y / m, self.z / m, self.w / m))
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    pub fn inverse(&self) -> Self {
        -*self
    }

    pub fn transform(&self, matrix: &Matrix<T, 4, 4>) -> Self {
        matrix.transform(self)
    }

    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z && self.w < other.w
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z && self.w <= other.w
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z && self.w > other.w
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z && self.w >= other.w
    }
}

impl<T: FloatingPoint> NumericContainer<T> for Vector4<T> {
    const ELEMENTS: usize = 4;

    fn from_slice(values: &[T]) -> NumericsResult<Self> {
        if values.len() != Self::ELEMENTS {
            return Err(NumericsError::InvalidArgument(format!(
                "Vector4 requires exactly {} values, got {}",
                Self::ELEMENTS,
                values.len()
            )));
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    fn element(&self, index: usize) -> NumericsResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(NumericsError::InvalidArgument(format!(
                "element index {index} out of range for Vector4"
            ))),
        }
    }

    fn elements(&self) -> Vec<T> {
        vec![self.x, self.y, self.z, self.w]
    }

    fn scalar(&self, factor: T) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }
}

impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: FloatingPoint> Neg for Vector4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Widening and narrowing conversions between the vector dimensions.
// Widening pads with zero, narrowing drops trailing components; both are
// explicit so dimension changes never happen silently.

impl<T: FloatingPoint> From<Vector2<T>> for Vector3<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y, T::zero())
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for Vector2<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for Vector4<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::zero())
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for Vector3<T> {
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Conversions between the vector types and tuples/arrays.

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);

        // add then subtract round-trips exactly
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_scalar_identities() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        assert_eq!(v.scalar(1.0), v);
        assert_eq!(v.scalar(0.0), Vector3::zero());
        assert_eq!(v.scalar(-1.0), v.inverse());
        assert_eq!(-v, v.inverse());
    }

    #[test]
    fn test_dot_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot_product(&b), 32.0);

        let a2 = Vector2::new(3.0, 4.0);
        assert_eq!(a2.dot_product(&a2), 25.0);

        let a4 = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a4.dot_product(&a4), 4.0);
    }

    #[test]
    fn test_cross_product_right_hand_rule() {
        let x = Vector3::<f64>::unit_x();
        let y = Vector3::unit_y();
        assert_eq!(x.cross_product(&y).unwrap(), Vector3::unit_z());
        assert_eq!(y.cross_product(&x).unwrap(), -Vector3::unit_z());
        assert_eq!(x.cross_product(&x).unwrap(), Vector3::zero());
    }

    #[test]
    fn test_cross_product_unsupported_dimensions() {
        let a = Vector2::new(1.0, 0.0);
        assert!(matches!(
            a.cross_product(&a),
            Err(NumericsError::UnsupportedOperation(_))
        ));

        let b = Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            b.cross_product(&b),
            Err(NumericsError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);

        let unit = v.normalize();
        assert!((unit.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector3::<f64>::zero();
        // documented degenerate case: zero in, zero out
        assert_eq!(zero.normalize(), zero);
        assert_eq!(zero.try_normalize(), Err(NumericsError::DegenerateVector));
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
        // symmetric
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_hadamard_and_divide() {
        let a = Vector3::<f64>::new(2.0, 3.0, 4.0);
        let b = Vector3::new(5.0, 6.0, 7.0);
        assert_eq!(a.hadamard_product(&b), Vector3::new(10.0, 18.0, 28.0));
        assert_eq!(a.hadamard_product(&b).divide(&b), a);

        // zero divisor follows IEEE-754
        let q = a.divide(&Vector3::new(0.0, 1.0, 1.0));
        assert!(q.x.is_infinite());
    }

    #[test]
    fn test_from_slice_validation() {
        let v = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        assert!(matches!(
            Vector3::<f64>::from_slice(&[1.0, 2.0]),
            Err(NumericsError::InvalidArgument(_))
        ));
        assert!(matches!(
            Vector2::<f64>::from_slice(&[1.0, 2.0, 3.0]),
            Err(NumericsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_element_access() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.element(0).unwrap(), 1.0);
        assert_eq!(v.element(3).unwrap(), 4.0);
        assert!(v.element(4).is_err());
        assert_eq!(v.elements(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_axis_constants() {
        assert_eq!(Vector3::<f64>::up(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Vector3::<f64>::down(), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(Vector3::<f64>::left(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(Vector3::<f64>::right(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector2::<f64>::unit_x(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::<f64>::unit_y(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector3::<f64>::splat(2.5), Vector3::new(2.5, 2.5, 2.5));
    }

    #[test]
    fn test_dimension_conversions() {
        let v2 = Vector2::new(1.0, 2.0);
        let v3: Vector3<f64> = v2.into();
        assert_eq!(v3, Vector3::new(1.0, 2.0, 0.0));

        let v4: Vector4<f64> = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v4, Vector4::new(1.0, 2.0, 3.0, 0.0));

        let narrowed: Vector3<f64> = Vector4::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(narrowed, Vector3::new(1.0, 2.0, 3.0));

        let narrowed2: Vector2<f64> = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(narrowed2, Vector2::new(1.0, 2.0));

        assert_eq!(
            Vector4::from_point(Vector3::new(1.0, 2.0, 3.0)),
            Vector4::new(1.0, 2.0, 3.0, 1.0)
        );
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vector3<f64> = (1.0, 2.0, 3.0).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let back: (f64, f64, f64) = v.into();
        assert_eq!(back, (1.0, 2.0, 3.0));

        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);

        let from_ref = Vector3::from(&[1.0, 2.0, 3.0]);
        assert_eq!(from_ref, v);
    }

    #[test]
    fn test_comparison_predicates() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(2.0, 2.0, 2.0);
        let mixed = Vector3::new(0.0, 5.0, 1.0);

        assert!(a.all_lt(&b));
        assert!(a.all_le(&a));
        assert!(!a.all_lt(&a));
        assert!(b.all_gt(&a));
        assert!(b.all_ge(&b));
        // an elementwise comparison with mixed outcomes satisfies neither side
        assert!(!a.all_lt(&mixed));
        assert!(!a.all_gt(&mixed));
    }

    #[test]
    fn test_generic_precision() {
        let v32: Vector3<f32> = Vector3::new(1.0_f32, 2.0, 3.0);
        let w32: Vector3<f32> = Vector3::new(3.0_f32, 2.0, 1.0);
        assert_eq!(v32 + w32, Vector3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let v = Vector3::new(1.0_f64, 2.0, 3.0);

        let encoded: Vec<u8> = bincode::serialize(&v).expect("serialize failed");
        assert!(!encoded.is_empty());

        let decoded: Vector3<f64> = bincode::deserialize(&encoded).expect("deserialize failed");
        assert_eq!(v, decoded);

        let v4 = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let enc = bincode::serialize(&v4).unwrap();
        let dec: Vector4<f32> = bincode::deserialize(&enc).unwrap();
        assert_eq!(v4, dec);
    }
}
