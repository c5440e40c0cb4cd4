//! Recursive subdivision of cube faces into screen-space quads with back-face culling.
//!
//! Each face's parameter square is halved `depth` times in both directions.
//! Every leaf rectangle is evaluated on the spherical cube map, placed on its
//! face, projected, and kept only if its projected winding faces the camera.
//! Because the cube-sphere is convex and the camera is outside it, the
//! winding test alone hides the far side.

use glam::DVec2;
use scube_cubesphere::{CubeFace, CubeMap, FaceCoord, project};
use tracing::debug;

use crate::{Polygon, RenderError, ViewTransform};

/// A rectangle of a face's parameter domain.
///
/// `top`/`bottom` bound `v`, `left`/`right` bound `u`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ParamRect {
    /// The whole face.
    pub const UNIT: ParamRect = ParamRect::new(0.0, 1.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Quarters at the midpoint: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn split(&self) -> [ParamRect; 4] {
        let y = (self.top + self.bottom) / 2.0;
        let x = (self.left + self.right) / 2.0;
        [
            ParamRect::new(self.top, y, self.left, x),
            ParamRect::new(self.top, y, x, self.right),
            ParamRect::new(y, self.bottom, self.left, x),
            ParamRect::new(y, self.bottom, x, self.right),
        ]
    }

    /// Corner `(u, v)` pairs in drawing order:
    ///
    /// ```text
    /// a b
    /// d c
    /// ```
    #[must_use]
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.right, self.bottom),
            (self.left, self.bottom),
        ]
    }
}

/// Whether the projected quad `a b c d` winds toward the camera.
///
/// Both triangles of the `a–c` split must satisfy `(c - a) ⊥ (b - a) > 0`
/// and `(d - a) ⊥ (c - a) > 0`. Bow-ties and back faces fail one of the two.
#[must_use]
pub fn is_front_facing(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    (c - a).perp_dot(b - a) > 0.0 && (d - a).perp_dot(c - a) > 0.0
}

fn corner(
    view: &ViewTransform,
    face: CubeFace,
    (u, v): (f64, f64),
) -> Result<DVec2, RenderError> {
    let p = project(&FaceCoord::new_unchecked(face, u, v), CubeMap::Spherical)?;
    view.project_2d(p)
}

/// Tessellate `rect` of `face` to `depth` levels, appending visible quads to `out`.
///
/// Evaluates exactly `4^depth` leaves; culled leaves are omitted silently.
pub fn tessellate_face(
    view: &ViewTransform,
    face: CubeFace,
    rect: ParamRect,
    depth: u32,
    out: &mut Vec<Polygon>,
) -> Result<(), RenderError> {
    if depth == 0 {
        let [a, b, c, d] = rect.corners().map(|uv| corner(view, face, uv));
        let (a, b, c, d) = (a?, b?, c?, d?);
        if is_front_facing(a, b, c, d) {
            out.push(Polygon::closed(vec![a, b, c, d]));
        }
        return Ok(());
    }

    for child in rect.split() {
        tessellate_face(view, face, child, depth - 1, out)?;
    }
    Ok(())
}

/// Tessellate all six faces in [`CubeFace::ALL`] order.
pub fn tessellate_cube(view: &ViewTransform, depth: u32) -> Result<Vec<Polygon>, RenderError> {
    let mut polygons = Vec::new();
    for face in CubeFace::ALL {
        let before = polygons.len();
        tessellate_face(view, face, ParamRect::UNIT, depth, &mut polygons)?;
        debug!(%face, depth, visible = polygons.len() - before, "tessellated face");
    }
    Ok(polygons)
}
