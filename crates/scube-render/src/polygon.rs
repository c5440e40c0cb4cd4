use glam::DVec2;

/// Ordered screen-space points. A closed polygon loops back to its first point.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
    pub closed: bool,
}

impl Polygon {
    /// A polyline through `points`.
    #[must_use]
    pub fn open(points: Vec<DVec2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// A loop through `points` and back to the first.
    #[must_use]
    pub fn closed(points: Vec<DVec2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive when the points turn counter-clockwise in a
    /// y-up frame. Treats the points as a loop even when `closed` is false.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice / 2.0
    }
}
