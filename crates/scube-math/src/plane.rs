use crate::{MathError, Vec3, Vec4};

/// An oriented plane: every point `p` on it satisfies `normal · p == offset`.
///
/// Invariant: `normal` has unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f64,
}

impl Plane {
    /// Fit the plane through `a`, `b`, `c`.
    ///
    /// The normal is `normalize((b - a) × (c - a))`, so counter-clockwise
    /// points (seen from the tip of the normal) give the positive side.
    ///
    /// # Errors
    /// [`MathError::DegeneratePlane`] if the points are collinear.
    pub fn through(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, MathError> {
        let normal = (b - a)
            .cross(c - a)
            .normalize()
            .map_err(|_| MathError::DegeneratePlane)?;
        Ok(Self {
            normal,
            offset: normal.dot(a),
        })
    }

    /// Signed distance from the plane to `p`, positive on the normal side.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, p: Vec3) -> f64 {
        self.normal.dot(p) - self.offset
    }

    /// Coefficients `(nx, ny, nz, offset)`.
    #[inline]
    #[must_use]
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.normal.x, self.normal.y, self.normal.z, self.offset)
    }
}
