//! Cube-sphere surface parameterizations: the six-face orientation table, the
//! linear and spherical cube maps, and the distortion metrics that compare them.

mod cube_face;
mod error;
mod face_coord;
pub mod metrics;
mod projection;

pub use cube_face::CubeFace;
pub use error::ProjectionError;
pub use face_coord::FaceCoord;
pub use projection::{
    CubeMap, grid_sample, linear_cube, linear_cube_point, project, spherical_cube,
    spherical_cube_angles, spherical_cube_point,
};
