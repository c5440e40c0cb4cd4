use std::path::PathBuf;

use scube_cubesphere::ProjectionError;
use scube_math::{MathError, Vec3};
use thiserror::Error;

/// Error types for building and drawing diagrams.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The camera's projection could not be built.
    #[error("invalid camera: {0}")]
    Camera(#[source] MathError),

    /// A cube map parameterization failed.
    #[error("surface sample failed: {0}")]
    Surface(#[from] ProjectionError),

    /// A surface point could not be projected to the screen.
    #[error("view projection of {point} failed: {source}")]
    View {
        point: Vec3,
        #[source]
        source: MathError,
    },

    /// The diagram file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
