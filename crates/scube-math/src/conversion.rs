//! Interop with `glam` double-precision types.
//!
//! `glam` stores matrices column-major; [`Mat4`] is row-major, so the
//! conversions transpose.

use glam::{DMat4, DVec3, DVec4};

use crate::{Mat4, Vec3, Vec4};

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec4> for Vec4 {
    fn from(v: DVec4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for DVec4 {
    fn from(v: Vec4) -> Self {
        DVec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<DMat4> for Mat4 {
    fn from(m: DMat4) -> Self {
        Mat4::from_rows(m.transpose().to_cols_array_2d())
    }
}

impl From<Mat4> for DMat4 {
    fn from(m: Mat4) -> Self {
        DMat4::from_cols_array_2d(&m.rows).transpose()
    }
}
