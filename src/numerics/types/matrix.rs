// src/numerics/types/matrix.rs
// Fixed-shape row-major matrix type. The shape lives in the type, so
// operand-shape errors for same-rank algebra are compile errors; only the
// dynamic construction path and indexed access can fail at runtime.

use core::array::from_fn;
use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

use crate::numerics::error::{NumericsError, NumericsResult};

use super::traits::{FloatingPoint, NumericContainer};
use super::vector::{Vector2, Vector3, Vector4};

/// A rows x cols matrix in row-major order with a template-able numeric type.
///
/// All operations are pure: "setting" a row, column or diagonal returns a
/// fresh matrix and never mutates the receiver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<T: FloatingPoint = f64, const R: usize = 4, const C: usize = 4> {
    pub data: [[T; C]; R],
}

impl<T: FloatingPoint, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn new(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Zero matrix.
    pub fn zero() -> Self {
        Self {
            data: from_fn(|_| from_fn(|_| T::zero())),
        }
    }

    /// Matrix with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: from_fn(|_| from_fn(|_| value)),
        }
    }

    /// Builds a matrix from dynamically sized nested rows. The outer length
    /// must be the row count and every inner length the column count;
    /// a disagreement fails with `DimensionMismatch`.
    pub fn from_rows(rows: &[&[T]]) -> NumericsResult<Self> {
        if rows.len() != R {
            return Err(NumericsError::DimensionMismatch {
                expected: R,
                actual: rows.len(),
            });
        }
        let mut data = [[T::zero(); C]; R];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(NumericsError::DimensionMismatch {
                    expected: C,
                    actual: row.len(),
                });
            }
            for (j, value) in row.iter().enumerate() {
                data[i][j] = *value;
            }
        }
        Ok(Self { data })
    }

    /// (rows, cols), fixed at the type level.
    pub const fn dimensions(&self) -> (usize, usize) {
        (R, C)
    }

    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Row `index` as an array.
    pub fn row(&self, index: usize) -> NumericsResult<[T; C]> {
        if index >= R {
            return Err(NumericsError::InvalidArgument(format!(
                "row index {index} out of range for a {R}x{C} matrix"
            )));
        }
        Ok(self.data[index])
    }

    /// Column `index` as an array.
    pub fn column(&self, index: usize) -> NumericsResult<[T; R]> {
        if index >= C {
            return Err(NumericsError::InvalidArgument(format!(
                "column index {index} out of range for a {R}x{C} matrix"
            )));
        }
        Ok(from_fn(|i| self.data[i][index]))
    }

    /// New matrix with row `index` replaced by `values`.
    pub fn set_row(&self, index: usize, values: [T; C]) -> NumericsResult<Self> {
        if index >= R {
            return Err(NumericsError::InvalidArgument(format!(
                "row index {index} out of range for a {R}x{C} matrix"
            )));
        }
        let mut data = self.data;
        data[index] = values;
        Ok(Self { data })
    }

    /// New matrix with column `index` replaced by `values`.
    pub fn set_column(&self, index: usize, values: [T; R]) -> NumericsResult<Self> {
        if index >= C {
            return Err(NumericsError::InvalidArgument(format!(
                "column index {index} out of range for a {R}x{C} matrix"
            )));
        }
        let mut data = self.data;
        for (i, row) in data.iter_mut().enumerate() {
            row[index] = values[i];
        }
        Ok(Self { data })
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            data: from_fn(|i| from_fn(|j| self.data[j][i])),
        }
    }

    /// Elementwise product with a matrix of the same shape.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self {
            data: from_fn(|i| from_fn(|j| self.data[i][j] * other.data[i][j])),
        }
    }

    /// Elementwise quotient; zero divisors follow IEEE-754.
    pub fn divide(&self, other: &Self) -> Self {
        Self {
            data: from_fn(|i| from_fn(|j| self.data[i][j] / other.data[i][j])),
        }
    }

    /// Matrix-vector product over raw arrays, for any shape.
    pub fn apply(&self, vector: [T; C]) -> [T; R] {
        from_fn(|i| {
            let mut acc = T::zero();
            for j in 0..C {
                acc = acc + self.data[i][j] * vector[j];
            }
            acc
        })
    }
}

// Square-matrix operations, shared by every N x N shape.
impl<T: FloatingPoint, const N: usize> Matrix<T, N, N> {
    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Zero matrix with `values` on the main diagonal.
    pub fn from_diagonal(values: [T; N]) -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.data[i][i] = values[i];
        }
        m
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> [T; N] {
        from_fn(|i| self.data[i][i])
    }

    /// New matrix with the main diagonal replaced by `values`.
    pub fn set_diagonal(&self, values: [T; N]) -> Self {
        let mut data = self.data;
        for (i, value) in values.into_iter().enumerate() {
            data[i][i] = value;
        }
        Self { data }
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> NumericContainer<T> for Matrix<T, R, C> {
    const ELEMENTS: usize = R * C;

    fn from_slice(values: &[T]) -> NumericsResult<Self> {
        if values.len() != Self::ELEMENTS {
            return Err(NumericsError::InvalidArgument(format!(
                "a {R}x{C} matrix requires exactly {} values, got {}",
                Self::ELEMENTS,
                values.len()
            )));
        }
        Ok(Self {
            data: from_fn(|i| from_fn(|j| values[i * C + j])),
        })
    }

    fn element(&self, index: usize) -> NumericsResult<T> {
        if index >= Self::ELEMENTS {
            return Err(NumericsError::InvalidArgument(format!(
                "element index {index} out of range for a {R}x{C} matrix"
            )));
        }
        Ok(self.data[index / C][index % C])
    }

    fn elements(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(Self::ELEMENTS);
        for row in &self.data {
            out.extend_from_slice(row);
        }
        out
    }

    fn scalar(&self, factor: T) -> Self {
        Self {
            data: from_fn(|i| from_fn(|j| self.data[i][j] * factor)),
        }
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            data: from_fn(|i| from_fn(|j| self.data[i][j] + other.data[i][j])),
        }
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            data: from_fn(|i| from_fn(|j| self.data[i][j] - other.data[i][j])),
        }
    }
}

// Scalar multiply via operator, matching the named `scalar` method.
impl<T: FloatingPoint, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.scalar(factor)
    }
}

// Standard matrix product: (R x C) * (C x K) -> (R x K). Incompatible inner
// dimensions simply do not type-check.
impl<T: FloatingPoint, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix {
            data: from_fn(|i| {
                from_fn(|k| {
                    let mut acc = T::zero();
                    for j in 0..C {
                        acc = acc + self.data[i][j] * rhs.data[j][k];
                    }
                    acc
                })
            }),
        }
    }
}

impl<T: FloatingPoint> Matrix<T, 2, 2> {
    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// True iff the determinant is zero within epsilon.
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() <= T::epsilon()
    }

    pub fn inverse(&self) -> NumericsResult<Self> {
        let det = self.determinant();
        if det.abs() <= T::epsilon() {
            return Err(NumericsError::NotInvertible {
                determinant: det.to_f64(),
            });
        }
        let m = &self.data;
        Ok(Self::new([
            [m[1][1] / det, -m[0][1] / det],
            [-m[1][0] / det, m[0][0] / det],
        ]))
    }

    /// Matrix * vector.
    pub fn transform(&self, vector: &Vector2<T>) -> Vector2<T> {
        let [x, y] = self.apply([vector.x, vector.y]);
        Vector2::new(x, y)
    }
}

impl<T: FloatingPoint> Matrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// True iff the determinant is zero within epsilon.
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() <= T::epsilon()
    }

    /// Adjugate inverse.
    pub fn inverse(&self) -> NumericsResult<Self> {
        let det = self.determinant();
        if det.abs() <= T::epsilon() {
            return Err(NumericsError::NotInvertible {
                determinant: det.to_f64(),
            });
        }
        let m = &self.data;
        Ok(Self::new([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ]))
    }

    /// Matrix * vector.
    pub fn transform(&self, vector: &Vector3<T>) -> Vector3<T> {
        let [x, y, z] = self.apply([vector.x, vector.y, vector.z]);
        Vector3::new(x, y, z)
    }
}

impl<T: FloatingPoint> Matrix<T, 4, 4> {
    // Pairwise 2x2 sub-determinants shared by determinant and inverse.
    fn cofactor_pairs(&self) -> [T; 12] {
        let m = &self.data;
        [
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
            m[0][0] * m[1][2] - m[0][2] * m[1][0],
            m[0][0] * m[1][3] - m[0][3] * m[1][0],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            m[0][1] * m[1][3] - m[0][3] * m[1][1],
            m[0][2] * m[1][3] - m[0][3] * m[1][2],
            m[2][0] * m[3][1] - m[2][1] * m[3][0],
            m[2][0] * m[3][2] - m[2][2] * m[3][0],
            m[2][0] * m[3][3] - m[2][3] * m[3][0],
            m[2][1] * m[3][2] - m[2][2] * m[3][1],
            m[2][1] * m[3][3] - m[2][3] * m[3][1],
            m[2][2] * m[3][3] - m[2][3] * m[3][2],
        ]
    }

    pub fn determinant(&self) -> T {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// True iff the determinant is zero within epsilon.
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() <= T::epsilon()
    }

    /// Cofactor-expansion inverse.
    pub fn inverse(&self) -> NumericsResult<Self> {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det.abs() <= T::epsilon() {
            return Err(NumericsError::NotInvertible {
                determinant: det.to_f64(),
            });
        }
        let m = &self.data;
        Ok(Self::new([
            [
                (m[1][1] * b11 - m[1][2] * b10 + m[1][3] * b09) / det,
                (m[0][2] * b10 - m[0][1] * b11 - m[0][3] * b09) / det,
                (m[3][1] * b05 - m[3][2] * b04 + m[3][3] * b03) / det,
                (m[2][2] * b04 - m[2][1] * b05 - m[2][3] * b03) / det,
            ],
            [
                (m[1][2] * b08 - m[1][0] * b11 - m[1][3] * b07) / det,
                (m[0][0] * b11 - m[0][2] * b08 + m[0][3] * b07) / det,
                (m[3][2] * b02 - m[3][0] * b05 - m[3][3] * b01) / det,
                (m[2][0] * b05 - m[2][2] * b02 + m[2][3] * b01) / det,
            ],
            [
                (m[1][0] * b10 - m[1][1] * b08 + m[1][3] * b06) / det,
                (m[0][1] * b08 - m[0][0] * b10 - m[0][3] * b06) / det,
                (m[3][0] * b04 - m[3][1] * b02 + m[3][3] * b00) / det,
                (m[2][1] * b02 - m[2][0] * b04 - m[2][3] * b00) / det,
            ],
            [
                (m[1][1] * b07 - m[1][0] * b09 - m[1][2] * b06) / det,
                (m[0][0] * b09 - m[0][1] * b07 + m[0][2] * b06) / det,
                (m[3][1] * b01 - m[3][0] * b03 - m[3][2] * b00) / det,
                (m[2][0] * b03 - m[2][1] * b01 + m[2][2] * b00) / det,
            ],
        ]))
    }

    /// Matrix * vector.
    pub fn transform(&self, vector: &Vector4<T>) -> Vector4<T> {
        let [x, y, z, w] = self.apply([vector.x, vector.y, vector.z, vector.w]);
        Vector4::new(x, y, z, w)
    }
}

impl<T: FloatingPoint> Mul<Vector2<T>> for Matrix<T, 2, 2> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.transform(&rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix<T, 3, 3> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.transform(&rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix<T, 4, 4> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.transform(&rhs)
    }
}

// Generic serde implementations: a matrix serializes as its nested
// row-major array.
impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
    T: FloatingPoint + Serialize,
    [[T; C]; R]: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: FloatingPoint + Deserialize<'de>,
    [[T; C]; R]: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[T; C]; R]>::deserialize(deserializer)?;
        Ok(Matrix { data })
    }
}
