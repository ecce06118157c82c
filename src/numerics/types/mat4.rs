// src/numerics/types/mat4.rs
// 4x4 specialization: the transform factories a camera or model system needs.
// Built on the generic Matrix type; vectors come in as Vector3/Vector4.

use crate::numerics::error::{NumericsError, NumericsResult};

use super::matrix::Matrix;
use super::traits::FloatingPoint;
use super::vector::{Vector3, Vector4};

/// A 4x4 matrix for 3D graphics transforms.
pub type Matrix4x4<T = f64> = Matrix<T, 4, 4>;

impl<T: FloatingPoint> Matrix<T, 4, 4> {
    /// Zero matrix with `diagonal` on the main diagonal.
    pub fn diagonal_from(diagonal: Vector4<T>) -> Self {
        Self::from_diagonal([diagonal.x, diagonal.y, diagonal.z, diagonal.w])
    }

    /// Builds a matrix from four row vectors.
    pub fn from_row_vectors(r0: Vector4<T>, r1: Vector4<T>, r2: Vector4<T>, r3: Vector4<T>) -> Self {
        Self::new([
            [r0.x, r0.y, r0.z, r0.w],
            [r1.x, r1.y, r1.z, r1.w],
            [r2.x, r2.y, r2.z, r2.w],
            [r3.x, r3.y, r3.z, r3.w],
        ])
    }

    /// Orthographic projection onto the box bounded by the six clip planes.
    ///
    /// Any coincident plane pair would divide by zero, so it is rejected as
    /// `InvalidArgument` instead of producing Inf/NaN.
    pub fn orthographic(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> NumericsResult<Self> {
        if (right - left).abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "orthographic: left and right planes coincide".into(),
            ));
        }
        if (top - bottom).abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "orthographic: bottom and top planes coincide".into(),
            ));
        }
        if (far - near).abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "orthographic: near and far planes coincide".into(),
            ));
        }

        let two = T::from_f64(2.0);
        let mut m = Self::zero();
        m.data[0][0] = two / (right - left);
        m.data[1][1] = two / (top - bottom);
        m.data[2][2] = -two / (far - near);
        m.data[0][3] = -(right + left) / (right - left);
        m.data[1][3] = -(top + bottom) / (top - bottom);
        m.data[2][3] = -(far + near) / (far - near);
        m.data[3][3] = T::one();
        Ok(m)
    }

    /// Perspective projection from a vertical field of view in radians.
    ///
    /// Degenerate parameters (coincident near/far planes, zero aspect ratio,
    /// a field of view whose half-angle tangent vanishes) are rejected as
    /// `InvalidArgument` instead of producing Inf/NaN.
    pub fn perspective(fov_y: T, aspect_ratio: T, near: T, far: T) -> NumericsResult<Self> {
        if (far - near).abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "perspective: near and far planes coincide".into(),
            ));
        }
        if aspect_ratio.abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "perspective: aspect ratio is zero".into(),
            ));
        }
        let two = T::from_f64(2.0);
        let half_tan = (fov_y / two).tan();
        if half_tan.abs() <= T::epsilon() {
            return Err(NumericsError::InvalidArgument(
                "perspective: field of view is degenerate".into(),
            ));
        }

        let focal = T::one() / half_tan;
        let mut m = Self::zero();
        m.data[0][0] = focal / aspect_ratio;
        m.data[1][1] = focal;
        m.data[2][2] = -(far + near) / (far - near);
        m.data[2][3] = -(two * far * near) / (far - near);
        m.data[3][2] = -T::one();
        Ok(m)
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// Fails with `DegenerateVector` when `eye` coincides with `target` or
    /// `up` is parallel to the view direction, since no orthonormal frame
    /// exists in either case.
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> NumericsResult<Self> {
        let forward = (target - eye).try_normalize()?;
        let side = forward.cross_product(&up.normalize())?.try_normalize()?;
        let true_up = side.cross_product(&forward)?;

        Ok(Self::new([
            [side.x, side.y, side.z, -side.dot_product(&eye)],
            [true_up.x, true_up.y, true_up.z, -true_up.dot_product(&eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot_product(&eye)],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ]))
    }

    /// Identity with the translation column set to (x, y, z, 1).
    pub fn translate(translation: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.data[0][3] = translation.x;
        m.data[1][3] = translation.y;
        m.data[2][3] = translation.z;
        m
    }

    /// Identity with the diagonal set to (x, y, z, 1).
    pub fn scale(factors: Vector3<T>) -> Self {
        Self::from_diagonal([factors.x, factors.y, factors.z, T::one()])
    }

    /// Rodrigues axis-angle rotation about `axis` by `angle_degrees`.
    ///
    /// The axis is normalized internally; a zero axis is `DegenerateVector`.
    pub fn rotate(angle_degrees: T, axis: Vector3<T>) -> NumericsResult<Self> {
        let axis = axis.try_normalize()?;
        let theta = angle_degrees.to_radians();
        let c = theta.cos();
        let s = theta.sin();
        let omc = T::one() - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        let mut m = Self::identity();
        m.data[0][0] = x * x * omc + c;
        m.data[0][1] = x * y * omc - z * s;
        m.data[0][2] = x * z * omc + y * s;
        m.data[1][0] = x * y * omc + z * s;
        m.data[1][1] = y * y * omc + c;
        m.data[1][2] = y * z * omc - x * s;
        m.data[2][0] = x * z * omc - y * s;
        m.data[2][1] = y * z * omc + x * s;
        m.data[2][2] = z * z * omc + c;
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec4_close(a: Vector4<f64>, b: Vector4<f64>) {
        assert!(a.distance(&b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity_neutrality() {
        let m: Matrix4x4<f64> = Matrix4x4::new([
            [2.0, 1.0, 0.0, 3.0],
            [0.0, 5.0, 1.0, 0.0],
            [1.0, 0.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let id = Matrix4x4::<f64>::identity();
        assert_eq!(id * m, m);
        assert_eq!(m * id, m);
    }

    #[test]
    fn test_diagonal_and_filled_factories() {
        let d = Matrix4x4::diagonal_from(Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(d.diagonal(), [1.0, 2.0, 3.0, 4.0]);

        let f = Matrix4x4::<f64>::filled(2.5);
        assert_eq!(f.data[3][1], 2.5);

        let rows = Matrix4x4::from_row_vectors(
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(rows, Matrix4x4::identity());
    }

    #[test]
    fn test_translate() {
        let m = Matrix4x4::translate(Vector3::new(1.0, 2.0, 3.0));
        let moved = m.transform(&Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(moved, Vector4::new(1.0, 2.0, 3.0, 1.0));

        // directions (w = 0) are unaffected by translation
        let dir = m.transform(&Vector4::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(dir, Vector4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let m = Matrix4x4::scale(Vector3::new(2.0, 2.0, 2.0));
        let scaled = m.transform(&Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(scaled, Vector4::new(2.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn test_orthographic_symmetric_unit_box() {
        let m = Matrix4x4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0).unwrap();
        // symmetric unit box: pure z-flip
        let expected = Matrix4x4::from_diagonal([1.0, 1.0, -1.0, 1.0]);
        assert_eq!(m, expected);

        let m = Matrix4x4::orthographic(0.0, 4.0, 0.0, 2.0, 1.0, 5.0).unwrap();
        assert!((m.data[0][0] - 0.5).abs() < 1e-12);
        assert!((m.data[1][1] - 1.0).abs() < 1e-12);
        assert!((m.data[2][2] + 0.5).abs() < 1e-12);
        assert!((m.data[0][3] + 1.0).abs() < 1e-12);
        assert!((m.data[1][3] + 1.0).abs() < 1e-12);
        assert!((m.data[2][3] + 1.5).abs() < 1e-12);
        assert_eq!(m.data[3][3], 1.0);
    }

    #[test]
    fn test_orthographic_rejects_coincident_planes() {
        assert!(matches!(
            Matrix4x4::orthographic(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0),
            Err(NumericsError::InvalidArgument(_))
        ));
        assert!(matches!(
            Matrix4x4::orthographic(1.0, 1.0, -1.0, 1.0, 0.0, 1.0),
            Err(NumericsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_perspective_unit_frustum() {
        let fov = core::f64::consts::FRAC_PI_2;
        let m = Matrix4x4::perspective(fov, 1.0, 1.0, 3.0).unwrap();

        // tan(fov/2) = 1
        assert!((m.data[0][0] - 1.0).abs() < 1e-12);
        assert!((m.data[1][1] - 1.0).abs() < 1e-12);
        assert!((m.data[2][2] + 2.0).abs() < 1e-12);
        assert!((m.data[2][3] + 3.0).abs() < 1e-12);
        assert_eq!(m.data[3][2], -1.0);
        assert_eq!(m.data[3][3], 0.0);

        // a point on the near plane projects to z/w = -1
        let near_point = m.transform(&Vector4::new(0.0, 0.0, -1.0, 1.0));
        assert!((near_point.z / near_point.w + 1.0).abs() < 1e-12);

        // and on the far plane to z/w = +1
        let far_point = m.transform(&Vector4::new(0.0, 0.0, -3.0, 1.0));
        assert!((far_point.z / far_point.w - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perspective_rejects_degenerate_parameters() {
        let fov = core::f64::consts::FRAC_PI_2;
        assert!(matches!(
            Matrix4x4::perspective(fov, 1.0, 2.0, 2.0),
            Err(NumericsError::InvalidArgument(_))
        ));
        assert!(matches!(
            Matrix4x4::perspective(fov, 0.0, 0.1, 100.0),
            Err(NumericsError::InvalidArgument(_))
        ));
        assert!(matches!(
            Matrix4x4::perspective(0.0, 1.0, 0.1, 100.0),
            Err(NumericsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_look_at_view_frame() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let m = Matrix4x4::look_at(eye, Vector3::zero(), Vector3::up()).unwrap();

        // the eye maps to the origin
        assert_vec4_close(
            m.transform(&Vector4::from_point(eye)),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        );
        // the target lies on the negative z axis at distance 5
        assert_vec4_close(
            m.transform(&Vector4::new(0.0, 0.0, 0.0, 1.0)),
            Vector4::new(0.0, 0.0, -5.0, 1.0),
        );
        // world up stays up
        assert_vec4_close(
            m.transform(&Vector4::new(0.0, 1.0, 0.0, 0.0)),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_look_at_degenerate_inputs() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Matrix4x4::look_at(eye, eye, Vector3::up()),
            Err(NumericsError::DegenerateVector)
        );
        // up parallel to the view direction leaves no usable side vector
        assert_eq!(
            Matrix4x4::look_at(Vector3::<f64>::zero(), Vector3::up(), Vector3::up()),
            Err(NumericsError::DegenerateVector)
        );
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        let m = Matrix4x4::rotate(90.0, Vector3::unit_z()).unwrap();
        let rotated = m.transform(&Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert_vec4_close(rotated, Vector4::new(0.0, 1.0, 0.0, 1.0));

        // full turn is identity
        let full = Matrix4x4::rotate(360.0, Vector3::unit_z()).unwrap();
        let back = full.transform(&Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_vec4_close(back, Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_rotate_normalizes_axis_and_rejects_zero() {
        // a non-unit axis behaves like its normalized form
        let a = Matrix4x4::rotate(45.0, Vector3::new(0.0, 0.0, 10.0)).unwrap();
        let b = Matrix4x4::rotate(45.0, Vector3::unit_z()).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert!((a.data[i][j] - b.data[i][j]).abs() < 1e-12);
            }
        }

        assert_eq!(
            Matrix4x4::rotate(45.0, Vector3::zero()),
            Err(NumericsError::DegenerateVector)
        );
    }

    #[test]
    fn test_rotation_preserves_length_and_inverts_by_transpose() {
        let m = Matrix4x4::rotate(30.0, Vector3::new(1.0, 1.0, 0.0)).unwrap();
        let v = Vector4::new(1.0, 2.0, 3.0, 0.0);
        let rotated = m.transform(&v);
        assert!((rotated.magnitude() - v.magnitude()).abs() < 1e-12);

        // rotation matrices are orthonormal: transpose is the inverse
        let round_trip = m.transpose().transform(&rotated);
        assert_vec4_close(round_trip, v);
    }

    #[test]
    fn test_translate_inverse() {
        let m = Matrix4x4::translate(Vector3::new(1.0, 2.0, 3.0));
        let inv = m.inverse().unwrap();
        let expected = Matrix4x4::translate(Vector3::new(-1.0, -2.0, -3.0));
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv.data[i][j] - expected.data[i][j]).abs() < 1e-12);
            }
        }
    }
}
