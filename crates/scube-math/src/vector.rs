use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::MathError;

/// 3D point or direction in f64.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// Unit vector in the X direction.
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Unit vector in the Y direction.
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Unit vector in the Z direction.
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create a new Vec3 with the given coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product: x₁x₂ + y₁y₂ + z₁z₂
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product self × rhs.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length √(x² + y² + z²).
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance from `self` to `rhs`.
    #[inline]
    #[must_use]
    pub fn distance(self, rhs: Vec3) -> f64 {
        (self - rhs).length()
    }

    /// Scale to unit length.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] when the length is zero or not finite;
    /// the division would otherwise yield NaN or infinite components.
    pub fn normalize(self) -> Result<Vec3, MathError> {
        let k = self.length();
        if k == 0.0 || !k.is_finite() {
            return Err(MathError::ZeroLength { length: k });
        }
        Ok(Vec3::new(self.x / k, self.y / k, self.z / k))
    }

    /// Components as an array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Homogeneous 4-vector. A point has `w = 1`, a direction `w = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Lift a 3D point into homogeneous space with `w = 1`.
    #[inline]
    #[must_use]
    pub const fn from_point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Four-component dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vec4) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Drop `w` without dividing.
    #[inline]
    #[must_use]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Perspective division: `(x/w, y/w, z/w)`.
    ///
    /// # Errors
    /// [`MathError::SingularTransform`] when `w` is zero.
    pub fn project(self) -> Result<Vec3, MathError> {
        if self.w == 0.0 {
            return Err(MathError::SingularTransform { w: self.w });
        }
        Ok(Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w))
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
