//! 2D parameter coordinates on a cube face.

use crate::CubeFace;

/// A point in a face's parameter domain. `u` and `v` are in the range \[0, 1\].
///
/// `u` runs along a grid row (the column index), `v` along a grid column
/// (the row index). `(0.5, 0.5)` is the face centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Horizontal parameter in \[0, 1\].
    pub u: f64,
    /// Vertical parameter in \[0, 1\].
    pub v: f64,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Construct without clamping, for parameters produced by exact
    /// subdivision of the unit square.
    #[must_use]
    pub fn new_unchecked(face: CubeFace, u: f64, v: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&u), "u out of range: {u}");
        debug_assert!((0.0..=1.0).contains(&v), "v out of range: {v}");
        Self { face, u, v }
    }
}
