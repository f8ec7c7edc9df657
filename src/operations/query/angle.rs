use crate::error::Result;
use crate::math;
use crate::model::{ModelStore, PointId};

/// Computes the angle `a-vertex-c` between three stored points, in degrees.
pub struct Angle {
    a: PointId,
    vertex: PointId,
    c: PointId,
}

impl Angle {
    /// Creates a new `Angle` query with the vertex at `vertex`.
    #[must_use]
    pub fn new(a: PointId, vertex: PointId, c: PointId) -> Self {
        Self { a, vertex, c }
    }

    /// Executes the query against the points' current positions.
    ///
    /// The result is NaN when the vertex coincides with `a` or `c`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the points is not found.
    pub fn execute(&self, store: &ModelStore) -> Result<f64> {
        let a = &store.point(self.a)?.position;
        let b = &store.point(self.vertex)?.position;
        let c = &store.point(self.c)?.position;
        let deg = math::angle_at_vertex(a, b, c);
        tracing::trace!(degrees = deg, "angle query");
        Ok(deg)
    }
}
