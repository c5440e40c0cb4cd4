//! Cube-to-sphere parameterizations.
//!
//! Provides two atlases of the sphere, each evaluated on the canonical `+Z`
//! face with `(u, v)` in `[0, 1]²`:
//! - **Linear**: a uniform grid on the flat face, normalized onto the sphere.
//! - **Spherical**: `u` and `v` are first warped to angles in `[-π/4, π/4]`,
//!   which evens out cell areas toward the face corners.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

use scube_math::Vec3;

use crate::{FaceCoord, ProjectionError};

/// Selects which cube map parameterization to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeMap {
    /// Flat face point `(2u − 1, 2v − 1, 1)`, normalized.
    Linear,
    /// Angular warp before normalization.
    Spherical,
}

impl CubeMap {
    pub const ALL: [CubeMap; 2] = [CubeMap::Linear, CubeMap::Spherical];

    /// Unit-sphere point for `(u, v)` on the canonical `+Z` face.
    ///
    /// # Errors
    /// [`ProjectionError`] if the un-normalized point has zero or non-finite
    /// length, which cannot happen for `u, v` in `[0, 1]`.
    pub fn canonical(self, u: f64, v: f64) -> Result<Vec3, ProjectionError> {
        match self {
            CubeMap::Linear => linear_cube(u, v),
            CubeMap::Spherical => spherical_cube(u, v),
        }
    }
}

impl fmt::Display for CubeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeMap::Linear => f.write_str("linear"),
            CubeMap::Spherical => f.write_str("spherical"),
        }
    }
}

/// Point on the `z = 1` face of the `[-1, 1]` cube.
#[inline]
#[must_use]
pub fn linear_cube_point(u: f64, v: f64) -> Vec3 {
    Vec3::new(2.0 * u - 1.0, 2.0 * v - 1.0, 1.0)
}

/// The standard cube-map direction for `(u, v)`, on the unit sphere.
pub fn linear_cube(u: f64, v: f64) -> Result<Vec3, ProjectionError> {
    linear_cube_point(u, v)
        .normalize()
        .map_err(|source| ProjectionError {
            map: CubeMap::Linear,
            u,
            v,
            source,
        })
}

/// Warp angles `(a, b)`, each in `[-π/4, π/4]` over the face.
#[inline]
#[must_use]
pub fn spherical_cube_angles(u: f64, v: f64) -> (f64, f64) {
    (FRAC_PI_2 * u - FRAC_PI_4, FRAC_PI_2 * v - FRAC_PI_4)
}

/// `(sin a · cos b, −cos a · sin b, cos a · cos b)`.
///
/// Note the `y` axis runs opposite to [`linear_cube_point`].
#[inline]
#[must_use]
pub fn spherical_cube_point(u: f64, v: f64) -> Vec3 {
    let (a, b) = spherical_cube_angles(u, v);
    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();
    Vec3::new(sin_a * cos_b, -cos_a * sin_b, cos_a * cos_b)
}

/// The spherical cube map direction for `(u, v)`, on the unit sphere.
pub fn spherical_cube(u: f64, v: f64) -> Result<Vec3, ProjectionError> {
    spherical_cube_point(u, v)
        .normalize()
        .map_err(|source| ProjectionError {
            map: CubeMap::Spherical,
            u,
            v,
            source,
        })
}

/// Evaluate `map` at `fc` and place the result on `fc.face`.
pub fn project(fc: &FaceCoord, map: CubeMap) -> Result<Vec3, ProjectionError> {
    map.canonical(fc.u, fc.v).map(|p| fc.face.orient(p))
}

/// Sample at the lower-left corner of cell `(row, col)` of an `n × n` face grid.
///
/// `col` drives `u` and `row` drives `v`; indices up to `n` (inclusive)
/// address the far edges. Not clamped: `n + 1` steps just past the face.
pub fn grid_sample(map: CubeMap, row: u32, col: u32, n: u32) -> Result<Vec3, ProjectionError> {
    let n = f64::from(n);
    map.canonical(f64::from(col) / n, f64::from(row) / n)
}
