//! Distortion metrics: solid angles and edge lengths of face grid cells.
//!
//! A perfect atlas would give every cell of an `n × n` face the same solid
//! angle and every grid edge the same length; the `max / min` ratio of each
//! is the figure of merit used to compare cube maps.

use std::fmt;

use scube_math::Vec3;
use tracing::debug;

use crate::{CubeMap, ProjectionError, grid_sample};

/// `tan(Ω / 2)` for the spherical triangle `a, b, c` seen from the origin.
///
/// Van Oosterom & Strackee:
/// `a·(b×c) / (|a||b||c| + (b·c)|a| + (a·c)|b| + (a·b)|c|)`.
/// The sign follows the winding; the quotient is unbounded as the
/// denominator approaches zero (Ω → π).
#[must_use]
pub fn triangle_solid_angle_tangent(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let (numerator, denominator) = solid_angle_terms(a, b, c);
    numerator / denominator
}

/// Signed solid angle of the spherical triangle `a, b, c` in steradians.
///
/// Positive when `a, b, c` wind counter-clockwise seen from outside.
/// A zero-area triangle yields zero.
#[must_use]
pub fn triangle_solid_angle(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let (numerator, denominator) = solid_angle_terms(a, b, c);
    2.0 * numerator.atan2(denominator)
}

fn solid_angle_terms(a: Vec3, b: Vec3, c: Vec3) -> (f64, f64) {
    let la = a.length();
    let lb = b.length();
    let lc = c.length();
    let numerator = a.dot(b.cross(c));
    let denominator = la * lb * lc + b.dot(c) * la + a.dot(c) * lb + a.dot(b) * lc;
    (numerator, denominator)
}

/// Solid angle of the quadrilateral `a, b, c, d`, split along the `a–c` diagonal.
///
/// Sums the two full triangle angles from [`triangle_solid_angle`], not the
/// raw [`triangle_solid_angle_tangent`] quotients. The two sums agree only for
/// small cells, so results differ from tables built on the quotient sum.
#[must_use]
pub fn quad_solid_angle(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f64 {
    triangle_solid_angle(a, b, c) + triangle_solid_angle(c, d, a)
}

/// Signed solid angle of grid cell `(row, col)` on an `n × n` face.
///
/// Corners are taken in the order `(r, c)`, `(r+1, c)`, `(r+1, c+1)`, `(r, c+1)`.
pub fn cell_solid_angle(map: CubeMap, row: u32, col: u32, n: u32) -> Result<f64, ProjectionError> {
    Ok(quad_solid_angle(
        grid_sample(map, row, col, n)?,
        grid_sample(map, row + 1, col, n)?,
        grid_sample(map, row + 1, col + 1, n)?,
        grid_sample(map, row, col + 1, n)?,
    ))
}

/// Chord length of the grid edge from `(row, col)` to `(row, col + 1)`.
pub fn cell_edge_length(map: CubeMap, row: u32, col: u32, n: u32) -> Result<f64, ProjectionError> {
    Ok(grid_sample(map, row, col, n)?.distance(grid_sample(map, row, col + 1, n)?))
}

/// Running minimum and maximum of a sampled metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extent {
    /// Contains nothing; `include` replaces both bounds on first use.
    pub const EMPTY: Extent = Extent {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    #[must_use]
    pub fn include(self, x: f64) -> Self {
        Self {
            min: self.min.min(x),
            max: self.max.max(x),
        }
    }

    /// Smallest value of one extent paired with the largest of another.
    #[must_use]
    pub fn spanning(low: Extent, high: Extent) -> Self {
        Self {
            min: low.min,
            max: high.max,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// `max / min`; at least 1 for any non-empty extent of positive samples.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.max / self.min
    }
}

impl FromIterator<f64> for Extent {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().fold(Extent::EMPTY, Extent::include)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.min, self.max, self.ratio())
    }
}

/// Edge lengths along grid row `row`.
///
/// Walks columns `0..n`, the `n` edges that lie on the face. Column `n`
/// would reach one sample past the far edge, which lowers the linear map's
/// minimum, so it is excluded.
pub fn row_edge_lengths(map: CubeMap, row: u32, n: u32) -> Result<Extent, ProjectionError> {
    (0..n).map(|col| cell_edge_length(map, row, col, n)).collect()
}

/// Edge lengths of every horizontal grid edge on the face (rows `0..=n`).
pub fn face_edge_lengths(map: CubeMap, n: u32) -> Result<Extent, ProjectionError> {
    let mut extent = Extent::EMPTY;
    for row in 0..=n {
        for col in 0..n {
            extent = extent.include(cell_edge_length(map, row, col, n)?);
        }
    }
    Ok(extent)
}

/// Absolute solid angles of every cell on the face.
pub fn face_solid_angles(map: CubeMap, n: u32) -> Result<Extent, ProjectionError> {
    let mut extent = Extent::EMPTY;
    for row in 0..n {
        for col in 0..n {
            extent = extent.include(cell_solid_angle(map, row, col, n)?.abs());
        }
    }
    Ok(extent)
}

/// Sum of the absolute cell solid angles; `4π / 6` for an exact tiling.
pub fn face_solid_angle_total(map: CubeMap, n: u32) -> Result<f64, ProjectionError> {
    let mut total = 0.0;
    for row in 0..n {
        for col in 0..n {
            total += cell_solid_angle(map, row, col, n)?.abs();
        }
    }
    Ok(total)
}

/// Single-edge probes at characteristic spots of the face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeProbes {
    /// First edge of row 0, at the face corner.
    pub corner: f64,
    /// Row 0 edge starting at the middle column.
    pub edge_middle: f64,
    /// Middle row edge starting at the middle column.
    pub center: f64,
}

/// Distortion summary of one cube map at one resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionReport {
    pub map: CubeMap,
    pub resolution: u32,
    /// Edges along the face boundary row.
    pub boundary_row: Extent,
    /// Edges along the middle row.
    pub middle_row: Extent,
    /// Minimum of the boundary row against maximum of the middle row.
    pub across_rows: Extent,
    pub face_edges: Extent,
    pub face_solid_angles: Extent,
    pub probes: EdgeProbes,
}

impl DistortionReport {
    /// Measure `map` on an `n × n` face grid. `n` must be positive.
    pub fn measure(map: CubeMap, n: u32) -> Result<Self, ProjectionError> {
        debug_assert!(n > 0, "grid resolution must be positive");
        let middle = n / 2;

        let boundary_row = row_edge_lengths(map, 0, n)?;
        let middle_row = row_edge_lengths(map, middle, n)?;
        let report = Self {
            map,
            resolution: n,
            boundary_row,
            middle_row,
            across_rows: Extent::spanning(boundary_row, middle_row),
            face_edges: face_edge_lengths(map, n)?,
            face_solid_angles: face_solid_angles(map, n)?,
            probes: EdgeProbes {
                corner: cell_edge_length(map, 0, 0, n)?,
                edge_middle: cell_edge_length(map, 0, middle, n)?,
                center: cell_edge_length(map, middle, middle, n)?,
            },
        };

        debug!(
            %map,
            n,
            edge_ratio = report.face_edges.ratio(),
            area_ratio = report.face_solid_angles.ratio(),
            "measured distortion"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_octant_triangle_is_an_eighth_of_the_sphere() {
        let omega = triangle_solid_angle(Vec3::X, Vec3::Y, Vec3::Z);
        assert!((omega - PI / 2.0).abs() < EPSILON, "got {omega}");
        // tan(π/4) = 1
        let t = triangle_solid_angle_tangent(Vec3::X, Vec3::Y, Vec3::Z);
        assert!((t - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_reversed_winding_negates_solid_angle() {
        let forward = triangle_solid_angle(Vec3::X, Vec3::Y, Vec3::Z);
        let reverse = triangle_solid_angle(Vec3::X, Vec3::Z, Vec3::Y);
        assert!((forward + reverse).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_solid_angle() {
        let a = Vec3::new(0.0, 0.6, 0.8);
        assert_eq!(triangle_solid_angle(a, a, Vec3::Z), 0.0);
        let b = Vec3::new(0.0, 0.8, 0.6);
        let mid = (a + b).normalize().unwrap();
        assert!(triangle_solid_angle(a, mid, b).abs() < EPSILON);
        assert!(triangle_solid_angle_tangent(a, mid, b).abs() < EPSILON);
    }

    #[test]
    fn test_solid_angle_ignores_vector_length() {
        let unit = triangle_solid_angle(Vec3::X, Vec3::Y, Vec3::Z);
        let scaled = triangle_solid_angle(Vec3::X * 2.0, Vec3::Y * 3.0, Vec3::Z * 0.5);
        assert!((unit - scaled).abs() < EPSILON);
    }

    #[test]
    fn test_quad_sums_full_angles_not_quotients() {
        // One cell spans the face; each half is far from small.
        let corners: Vec<Vec3> = [(0, 0), (1, 0), (1, 1), (0, 1)]
            .into_iter()
            .map(|(row, col)| grid_sample(CubeMap::Linear, row, col, 1).unwrap())
            .collect();
        let [a, b, c, d] = [corners[0], corners[1], corners[2], corners[3]];
        let quad = quad_solid_angle(a, b, c, d);
        let angles = triangle_solid_angle(a, b, c) + triangle_solid_angle(c, d, a);
        let quotients = triangle_solid_angle_tangent(a, b, c) + triangle_solid_angle_tangent(c, d, a);
        assert_eq!(quad, angles);
        assert!((quad - quotients).abs() > 0.5, "{quad} vs {quotients}");
    }

    #[test]
    fn test_single_cell_is_a_sixth_of_the_sphere() {
        let expected = 4.0 * PI / 6.0;
        for map in CubeMap::ALL {
            let omega = cell_solid_angle(map, 0, 0, 1).unwrap();
            assert!((omega.abs() - expected).abs() < EPSILON, "{map}: {omega}");
        }
    }

    #[test]
    fn test_cells_tile_the_face() {
        let expected = 4.0 * PI / 6.0;
        for map in CubeMap::ALL {
            for n in [2, 5, 16] {
                let total = face_solid_angle_total(map, n).unwrap();
                assert!((total - expected).abs() < 1e-9, "{map} n={n}: {total}");
            }
        }
    }

    #[test]
    fn test_cell_winding_differs_between_maps() {
        // The spherical map's y axis runs opposite to the linear map's.
        assert!(cell_solid_angle(CubeMap::Linear, 3, 5, 8).unwrap() < 0.0);
        assert!(cell_solid_angle(CubeMap::Spherical, 3, 5, 8).unwrap() > 0.0);
    }

    #[test]
    fn test_boundary_row_stays_on_the_face() {
        let n = 16;
        let row = row_edge_lengths(CubeMap::Linear, 0, n).unwrap();
        let first = cell_edge_length(CubeMap::Linear, 0, 0, n).unwrap();
        assert!((row.min - first).abs() < 1e-12, "{} vs {first}", row.min);
        // The edge leaving the face is shorter than any edge on it.
        let outside = cell_edge_length(CubeMap::Linear, 0, n, n).unwrap();
        assert!(outside < row.min);
    }

    #[test]
    fn test_extent_collects_min_and_max() {
        let extent: Extent = [3.0, 1.5, 4.5, 2.0].into_iter().collect();
        assert_eq!(extent, Extent { min: 1.5, max: 4.5 });
        assert_eq!(extent.ratio(), 3.0);
        assert!(!extent.is_empty());
        assert!(Extent::EMPTY.is_empty());
        assert_eq!(extent.to_string(), "1.5 4.5 3");
    }

    #[test]
    fn test_ratios_are_at_least_one() {
        for map in CubeMap::ALL {
            for n in [1, 4, 16] {
                let edges = face_edge_lengths(map, n).unwrap();
                let areas = face_solid_angles(map, n).unwrap();
                assert!(edges.ratio() >= 1.0, "{map} n={n}: {edges:?}");
                assert!(areas.ratio() >= 1.0 - EPSILON, "{map} n={n}: {areas:?}");
            }
        }
    }

    #[test]
    fn test_spherical_map_distorts_less_than_linear() {
        for n in [4, 16, 64] {
            let linear = DistortionReport::measure(CubeMap::Linear, n).unwrap();
            let spherical = DistortionReport::measure(CubeMap::Spherical, n).unwrap();
            assert!(spherical.face_edges.ratio() < linear.face_edges.ratio());
            assert!(spherical.face_solid_angles.ratio() < linear.face_solid_angles.ratio());
        }
    }

    #[test]
    fn test_report_at_sixteen() {
        let linear = DistortionReport::measure(CubeMap::Linear, 16).unwrap();
        assert!((linear.face_edges.ratio() - 2.024001670178432).abs() < 1e-9);
        assert!((linear.face_solid_angles.ratio() - 4.505735887619766).abs() < 1e-9);
        assert!((linear.probes.corner - 0.06140058328198007).abs() < 1e-12);
        assert!((linear.probes.center - 0.12427488311265757).abs() < 1e-12);

        let spherical = DistortionReport::measure(CubeMap::Spherical, 16).unwrap();
        assert!((spherical.face_edges.ratio() - 1.4116606529363636).abs() < 1e-9);
        assert!((spherical.face_solid_angles.ratio() - 1.3450923703890088).abs() < 1e-9);
        assert!((spherical.probes.edge_middle - 0.06951766237211969).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_middle_row_is_uniform() {
        let report = DistortionReport::measure(CubeMap::Spherical, 32).unwrap();
        assert!((report.middle_row.ratio() - 1.0).abs() < 1e-9);
        let linear = DistortionReport::measure(CubeMap::Linear, 32).unwrap();
        assert!(linear.middle_row.ratio() > 1.5);
    }

    #[test]
    fn test_across_rows_pairs_boundary_min_with_middle_max() {
        let report = DistortionReport::measure(CubeMap::Linear, 8).unwrap();
        assert_eq!(report.across_rows.min, report.boundary_row.min);
        assert_eq!(report.across_rows.max, report.middle_row.max);
    }
}
