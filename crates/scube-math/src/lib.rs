//! f64 vector and matrix algebra for the cube-map diagrams: 3- and 4-vectors,
//! planes, 4×4 transforms, and projection frusta.

mod conversion;
mod error;
mod matrix;
mod plane;
mod vector;

pub use error::MathError;
pub use matrix::{Frustum, Mat4};
pub use plane::Plane;
pub use vector::{Vec3, Vec4};
