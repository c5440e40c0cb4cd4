use scube_math::MathError;

use crate::CubeMap;

/// A parameterization could not place `(u, v)` on the sphere.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{map} cube map failed at (u={u}, v={v}): {source}")]
pub struct ProjectionError {
    /// Which parameterization was evaluated.
    pub map: CubeMap,
    pub u: f64,
    pub v: f64,
    #[source]
    pub source: MathError,
}
