//! Grid-line drawings of a single cube face.

use glam::DVec2;
use scube_cubesphere::{CubeMap, grid_sample};
use tracing::debug;

use crate::{Polygon, RenderError, ViewTransform};

/// Lines of constant `u` and constant `v` across the canonical `+Z` face of `map`.
///
/// Returns `n + 1` column polylines (each walking rows `0..=n`) followed by
/// `n + 1` row polylines (each walking columns `0..=n`). All are open.
pub fn face_grid(
    view: &ViewTransform,
    map: CubeMap,
    n: u32,
) -> Result<Vec<Polygon>, RenderError> {
    let mut lines = Vec::with_capacity(2 * (n as usize + 1));

    for col in 0..=n {
        let points = (0..=n)
            .map(|row| sample(view, map, row, col, n))
            .collect::<Result<Vec<_>, _>>()?;
        lines.push(Polygon::open(points));
    }
    for row in 0..=n {
        let points = (0..=n)
            .map(|col| sample(view, map, row, col, n))
            .collect::<Result<Vec<_>, _>>()?;
        lines.push(Polygon::open(points));
    }

    debug!(%map, resolution = n, lines = lines.len(), "drew face grid");
    Ok(lines)
}

fn sample(
    view: &ViewTransform,
    map: CubeMap,
    row: u32,
    col: u32,
    n: u32,
) -> Result<DVec2, RenderError> {
    view.project_2d(grid_sample(map, row, col, n)?)
}
