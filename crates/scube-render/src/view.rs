//! Camera configuration → a single model-view-projection-viewport matrix.

use glam::DVec2;
use scube_config::{CameraConfig, ProjectionKind};
use scube_math::{Mat4, Vec3, Vec4};

use crate::RenderError;

/// Maps model-space points to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    matrix: Mat4,
}

impl ViewTransform {
    /// Wrap an already composed matrix.
    #[must_use]
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// The transform stages for `camera`, listed screen-side first:
    ///
    /// ```text
    /// translate(w/2, h/2, 0), scale(w/2, h/2, 1), projection,
    /// [translate(0, 0, -distance), rotate_x(pitch), rotate_y(yaw)]
    /// ```
    ///
    /// Composed with [`Mat4::compose`], the yaw is applied to a point first.
    pub fn stages(camera: &CameraConfig) -> Result<Vec<Mat4>, RenderError> {
        let half_w = f64::from(camera.viewport.width) / 2.0;
        let half_h = f64::from(camera.viewport.height) / 2.0;
        let frustum = camera.frustum.to_frustum();
        let projection = match camera.projection {
            ProjectionKind::Perspective => Mat4::perspective(&frustum),
            ProjectionKind::Orthogonal => Mat4::orthogonal(&frustum),
        }
        .map_err(RenderError::Camera)?;

        let mut stages = vec![
            Mat4::translate(Vec3::new(half_w, half_h, 0.0)),
            Mat4::scale(Vec3::new(half_w, half_h, 1.0)),
            projection,
        ];
        if let Some(orbit) = &camera.orbit {
            stages.extend([
                Mat4::translate(Vec3::new(0.0, 0.0, -orbit.distance)),
                Mat4::rotate_x(orbit.pitch_deg.to_radians()),
                Mat4::rotate_y(orbit.yaw_deg.to_radians()),
            ]);
        }
        Ok(stages)
    }

    /// Compose the full pipeline for `camera`.
    ///
    /// # Errors
    /// [`RenderError::Camera`] for a degenerate frustum.
    pub fn from_camera(camera: &CameraConfig) -> Result<Self, RenderError> {
        Ok(Self::new(Mat4::compose(&Self::stages(camera)?)))
    }

    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Homogeneous coordinates before perspective division.
    #[must_use]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        self.matrix.transform(v)
    }

    /// Screen-space `(x, y)` in pixels plus normalized depth.
    ///
    /// # Errors
    /// [`RenderError::View`] if `p` lies in the camera's eye plane.
    pub fn project(&self, p: Vec3) -> Result<Vec3, RenderError> {
        self.matrix
            .transform_point(p)
            .map_err(|source| RenderError::View { point: p, source })
    }

    /// Screen-space pixel position of `p`.
    pub fn project_2d(&self, p: Vec3) -> Result<DVec2, RenderError> {
        let s = self.project(p)?;
        Ok(DVec2::new(s.x, s.y))
    }
}
