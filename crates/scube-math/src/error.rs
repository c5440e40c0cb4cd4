//! Numeric failure modes of the algebra.

/// Errors raised where an operation would otherwise divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Normalizing a vector whose length is zero or not finite.
    #[error("cannot normalize a vector of length {length}")]
    ZeroLength {
        /// The offending length.
        length: f64,
    },

    /// The three points given to a plane fit are collinear.
    #[error("plane points are collinear")]
    DegeneratePlane,

    /// A projective transform produced `w == 0`.
    #[error("transformed point has w = {w}, cannot divide")]
    SingularTransform {
        /// The transformed w component.
        w: f64,
    },

    /// A projection was requested for an empty or inverted view volume.
    #[error("invalid frustum: {reason}")]
    InvalidFrustum {
        /// Which bound is malformed.
        reason: &'static str,
    },
}
