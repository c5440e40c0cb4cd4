//! Row-major 4×4 transforms and the canonical matrix builders.

use crate::{MathError, Vec3, Vec4};

/// A 4×4 matrix stored row-major: `rows[i][j]` is row `i`, column `j`.
///
/// Column vectors are transformed as `M · v`, so translation lives in the
/// last column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub rows: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Row `i` as a 4-vector; `i < 4`.
    #[inline]
    const fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.rows[i])
    }

    /// Translation along `v`.
    #[must_use]
    pub const fn translate(v: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Non-uniform scale by the components of `v`.
    #[must_use]
    pub const fn scale(v: Vec3) -> Self {
        Self::from_rows([
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about the X axis by `angle` radians.
    #[must_use]
    pub fn rotate_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about the Y axis by `angle` radians.
    #[must_use]
    pub fn rotate_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about the Z axis by `angle` radians.
    #[must_use]
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Perspective projection onto the near plane of `frustum`.
    ///
    /// Eye space looks down −Z; the result maps the frustum to the
    /// `[-1, 1]³` clip cube after division by `w = -z`.
    ///
    /// # Errors
    /// [`MathError::InvalidFrustum`] for an empty volume or `near <= 0`.
    pub fn perspective(frustum: &Frustum) -> Result<Self, MathError> {
        frustum.validate()?;
        if frustum.near <= 0.0 {
            return Err(MathError::InvalidFrustum {
                reason: "perspective near plane must be positive",
            });
        }
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *frustum;

        Ok(Self::from_rows([
            [(n + n) / (r - l), 0.0, (r + l) / (r - l), 0.0],
            [0.0, (n + n) / (t - b), (t + b) / (t - b), 0.0],
            [0.0, 0.0, (n + f) / (n - f), -2.0 * f * n / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ]))
    }

    /// Orthogonal (parallel) projection of `frustum` onto `[-1, 1]³`.
    ///
    /// # Errors
    /// [`MathError::InvalidFrustum`] for an empty volume.
    pub fn orthogonal(frustum: &Frustum) -> Result<Self, MathError> {
        frustum.validate()?;
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *frustum;

        Ok(Self::from_rows([
            [2.0 / (r - l), 0.0, 0.0, -(r + l) / (r - l)],
            [0.0, 2.0 / (t - b), 0.0, -(t + b) / (t - b)],
            [0.0, 0.0, -2.0 / (f - n), -(f + n) / (f - n)],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// The product `self · rhs`.
    ///
    /// `rhs` is transposed first so every entry is a dot product of two rows.
    #[must_use]
    pub fn multiply(&self, rhs: &Mat4) -> Self {
        let t = rhs.transpose();
        let mut rows = [[0.0; 4]; 4];
        for (i, out) in rows.iter_mut().enumerate() {
            let a = self.row(i);
            for (j, entry) in out.iter_mut().enumerate() {
                *entry = a.dot(t.row(j));
            }
        }
        Self::from_rows(rows)
    }

    /// Fold `matrices` left to right into `I · M0 · M1 · … · Mk`.
    ///
    /// The last matrix in the list is the first applied to a point, so a
    /// pipeline is listed from screen space back to model space.
    #[must_use]
    pub fn compose(matrices: &[Mat4]) -> Self {
        matrices
            .iter()
            .fold(Self::IDENTITY, |acc, m| acc.multiply(m))
    }

    /// Homogeneous transform `self · v` without perspective division.
    #[must_use]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transform the point `p` (with `w = 1`) and divide by the resulting `w`.
    ///
    /// # Errors
    /// [`MathError::SingularTransform`] when the transformed `w` is zero,
    /// e.g. a point in the eye plane of a perspective projection.
    pub fn transform_point(&self, p: Vec3) -> Result<Vec3, MathError> {
        self.transform(Vec4::from_point(p)).project()
    }
}

/// Clipping-plane distances for a view volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    #[must_use]
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// A volume symmetric about the view axis: `[-s, s] × [-s, s] × [near, far]`.
    #[must_use]
    pub const fn symmetric(s: f64, near: f64, far: f64) -> Self {
        Self::new(-s, s, -s, s, near, far)
    }

    /// Reject bounds that would divide by zero in either projection.
    ///
    /// # Errors
    /// [`MathError::InvalidFrustum`] naming the first malformed pair.
    pub fn validate(&self) -> Result<(), MathError> {
        let bounds = [
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(MathError::InvalidFrustum {
                reason: "bounds must be finite",
            });
        }
        if self.left == self.right {
            return Err(MathError::InvalidFrustum {
                reason: "left equals right",
            });
        }
        if self.bottom == self.top {
            return Err(MathError::InvalidFrustum {
                reason: "bottom equals top",
            });
        }
        if self.near == self.far {
            return Err(MathError::InvalidFrustum {
                reason: "near equals far",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    fn approx_eq(a: &Mat4, b: &Mat4) -> bool {
        a.rows
            .iter()
            .flatten()
            .zip(b.rows.iter().flatten())
            .all(|(x, y)| (x - y).abs() < EPSILON * (1.0 + x.abs().max(y.abs())))
    }

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = sample();
        assert_eq!(Mat4::identity().multiply(&a), a);
        assert_eq!(a.multiply(&Mat4::identity()), a);
    }

    #[test]
    fn test_transpose_is_involution() {
        let a = sample();
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(a.transpose().rows[0], [1.0, 5.0, 9.0, 13.0]);
    }

    #[test]
    fn test_row_reads_stored_row() {
        let a = sample();
        assert_eq!(a.row(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a.row(3), Vec4::new(13.0, 14.0, 15.0, 16.0));
    }

    #[test]
    fn test_multiply_matches_textbook_product() {
        let a = sample();
        let b = Mat4::translate(Vec3::new(1.0, 2.0, 3.0));
        let p = a.multiply(&b);
        for i in 0..4 {
            for j in 0..4 {
                let expected: f64 = (0..4).map(|k| a.rows[i][k] * b.rows[k][j]).sum();
                assert_eq!(p.rows[i][j], expected, "entry ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_multiply_is_associative() {
        let a = Mat4::rotate_x(0.3);
        let b = Mat4::translate(Vec3::new(1.0, -2.0, 0.5));
        let c = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));
        assert!(approx_eq(&left, &right));
    }

    #[test]
    fn test_multiply_is_not_commutative() {
        let t = Mat4::translate(Vec3::X);
        let r = Mat4::rotate_z(FRAC_PI_2);
        assert!(!approx_eq(&t.multiply(&r), &r.multiply(&t)));
    }

    #[test]
    fn test_compose_applies_last_matrix_first() {
        // Rotate (1, 0, 0) to (0, 1, 0), then translate by +X: (1, 1, 0).
        let m = Mat4::compose(&[Mat4::translate(Vec3::X), Mat4::rotate_z(FRAC_PI_2)]);
        let p = m.transform_point(Vec3::X).unwrap();
        assert!(approx_vec(p, Vec3::new(1.0, 1.0, 0.0)), "got {p}");

        // The reverse order translates first: (2, 0, 0) then rotates to (0, 2, 0).
        let m = Mat4::compose(&[Mat4::rotate_z(FRAC_PI_2), Mat4::translate(Vec3::X)]);
        let p = m.transform_point(Vec3::X).unwrap();
        assert!(approx_vec(p, Vec3::new(0.0, 2.0, 0.0)), "got {p}");
    }

    #[test]
    fn test_compose_empty_is_identity() {
        assert_eq!(Mat4::compose(&[]), Mat4::IDENTITY);
    }

    #[test]
    fn test_compose_equals_explicit_product() {
        let a = Mat4::rotate_y(0.4);
        let b = Mat4::scale(Vec3::new(2.0, 2.0, 2.0));
        let c = Mat4::translate(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(Mat4::compose(&[a, b, c]), a.multiply(&b).multiply(&c));
    }

    #[test]
    fn test_rotations_are_right_handed() {
        let r = Mat4::rotate_x(FRAC_PI_2).transform_point(Vec3::Y).unwrap();
        assert!(approx_vec(r, Vec3::Z));
        let r = Mat4::rotate_y(FRAC_PI_2).transform_point(Vec3::Z).unwrap();
        assert!(approx_vec(r, Vec3::X));
        let r = Mat4::rotate_z(FRAC_PI_2).transform_point(Vec3::X).unwrap();
        assert!(approx_vec(r, Vec3::Y));
    }

    #[test]
    fn test_translate_and_scale() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Mat4::translate(Vec3::new(10.0, 20.0, 30.0))
                .transform_point(p)
                .unwrap(),
            Vec3::new(11.0, 22.0, 33.0)
        );
        assert_eq!(
            Mat4::scale(Vec3::new(2.0, 3.0, 4.0)).transform_point(p).unwrap(),
            Vec3::new(2.0, 6.0, 12.0)
        );
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let m = Mat4::perspective(&Frustum::symmetric(0.25, 1.0, 10.0)).unwrap();
        let near = m.transform_point(Vec3::new(0.25, 0.25, -1.0)).unwrap();
        assert!(approx_vec(near, Vec3::new(1.0, 1.0, -1.0)), "got {near}");
        let far = m.transform_point(Vec3::new(-2.5, -2.5, -10.0)).unwrap();
        assert!(approx_vec(far, Vec3::new(-1.0, -1.0, 1.0)), "got {far}");
    }

    #[test]
    fn test_perspective_w_is_negated_depth() {
        let m = Mat4::perspective(&Frustum::symmetric(0.25, 1.0, 10.0)).unwrap();
        let clip = m.transform(Vec4::from_point(Vec3::new(0.0, 0.0, -5.0)));
        assert_eq!(clip.w, 5.0);
    }

    #[test]
    fn test_perspective_eye_plane_is_singular() {
        let m = Mat4::perspective(&Frustum::symmetric(0.25, 1.0, 10.0)).unwrap();
        let result = m.transform_point(Vec3::new(1.0, 1.0, 0.0));
        assert!(matches!(result, Err(MathError::SingularTransform { .. })));
    }

    #[test]
    fn test_orthogonal_maps_box_to_clip_cube() {
        let m = Mat4::orthogonal(&Frustum::symmetric(0.75, 1.0, 10.0)).unwrap();
        let p = m.transform_point(Vec3::new(0.75, -0.75, -1.0)).unwrap();
        assert!(approx_vec(p, Vec3::new(1.0, -1.0, -1.0)), "got {p}");
        let q = m.transform_point(Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert!(approx_vec(q, Vec3::new(0.0, 0.0, 1.0)), "got {q}");
    }

    #[test]
    fn test_degenerate_frusta_are_rejected() {
        let cases = [
            Frustum::new(1.0, 1.0, -1.0, 1.0, 1.0, 10.0),
            Frustum::new(-1.0, 1.0, 2.0, 2.0, 1.0, 10.0),
            Frustum::new(-1.0, 1.0, -1.0, 1.0, 3.0, 3.0),
            Frustum::new(-1.0, f64::NAN, -1.0, 1.0, 1.0, 10.0),
        ];
        for f in cases {
            assert!(
                matches!(Mat4::orthogonal(&f), Err(MathError::InvalidFrustum { .. })),
                "orthogonal accepted {f:?}"
            );
            assert!(
                matches!(Mat4::perspective(&f), Err(MathError::InvalidFrustum { .. })),
                "perspective accepted {f:?}"
            );
        }
    }

    #[test]
    fn test_perspective_requires_positive_near() {
        let f = Frustum::new(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0);
        assert!(Mat4::orthogonal(&f).is_ok());
        assert!(matches!(
            Mat4::perspective(&f),
            Err(MathError::InvalidFrustum { .. })
        ));
    }
}
