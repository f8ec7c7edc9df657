use crate::error::Result;
use crate::math::{self, Point3, Vector3};
use crate::model::{ModelStore, TriangleId};

/// Resolved geometry of a triangle at the time of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMeasurements {
    /// Current positions of the three member points, in membership order.
    pub vertices: [Point3; 3],
    /// Side lengths `|v0v1|`, `|v1v2|`, `|v2v0|`.
    pub sides: [f64; 3],
    pub perimeter: f64,
    pub area: f64,
    /// Interior angles at `v0`, `v1`, `v2`, in degrees. NaN at a vertex that
    /// coincides with a neighbor.
    pub angles: [f64; 3],
}

impl TriangleMeasurements {
    /// Returns `true` if the three vertices are collinear (or coincident).
    ///
    /// The area is compared against the squared longest side, so the test
    /// does not depend on the triangle's absolute size.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let longest = self.sides.iter().copied().fold(0.0, f64::max);
        self.area <= math::TOLERANCE * longest * longest
    }
}

/// Half the cross-product norm of two edges, evaluated on edges divided by
/// their largest component so the product neither overflows nor underflows.
fn scaled_area(e1: Vector3, e2: Vector3) -> f64 {
    let scale = e1.amax().max(e2.amax());
    if scale == 0.0 {
        return 0.0;
    }
    let cross = (e1 / scale).cross(&(e2 / scale));
    math::length(&cross) * 0.5 * scale * scale
}

/// Measures a triangle from its points' current positions.
///
/// Nothing is cached on the triangle: every execution looks the member
/// points up again.
pub struct TriangleGeometry {
    triangle: TriangleId,
}

impl TriangleGeometry {
    /// Creates a new `TriangleGeometry` query.
    #[must_use]
    pub fn new(triangle: TriangleId) -> Self {
        Self { triangle }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its points is not found.
    pub fn execute(&self, store: &ModelStore) -> Result<TriangleMeasurements> {
        let vertices = store.resolve_triangle(self.triangle)?;
        let [v0, v1, v2] = &vertices;

        let sides = [
            math::distance(v0, v1),
            math::distance(v1, v2),
            math::distance(v2, v0),
        ];
        let area = scaled_area(v1 - v0, v2 - v0);
        let angles = [
            math::angle_at_vertex(v2, v0, v1),
            math::angle_at_vertex(v0, v1, v2),
            math::angle_at_vertex(v1, v2, v0),
        ];

        Ok(TriangleMeasurements {
            vertices,
            sides,
            perimeter: sides.iter().sum(),
            area,
            angles,
        })
    }
}
