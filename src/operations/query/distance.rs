use crate::error::Result;
use crate::math;
use crate::model::{ModelStore, PointId};

/// Computes the distance between two stored points.
pub struct Distance {
    a: PointId,
    b: PointId,
}

impl Distance {
    /// Creates a new `Distance` query.
    #[must_use]
    pub fn new(a: PointId, b: PointId) -> Self {
        Self { a, b }
    }

    /// Executes the query against the points' current positions.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not found.
    pub fn execute(&self, store: &ModelStore) -> Result<f64> {
        let a = &store.point(self.a)?.position;
        let b = &store.point(self.b)?.position;
        let d = math::distance(a, b);
        tracing::trace!(distance = d, "distance query");
        Ok(d)
    }
}
