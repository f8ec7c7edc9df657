use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the model store.
    pub struct TriangleId;
}

/// Data associated with a triangle shape.
///
/// A triangle only records which points it is made of. Coordinates are
/// looked up in the store whenever geometry is needed, so moving a point
/// moves every triangle that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleData {
    /// The three member points, in selection order.
    pub points: [PointId; 3],
    /// Display name, e.g. `Tri 1 (P1, P2, P3)`.
    pub name: String,
}

impl TriangleData {
    /// Creates a new triangle over the given points.
    #[must_use]
    pub fn new(points: [PointId; 3], name: impl Into<String>) -> Self {
        Self {
            points,
            name: name.into(),
        }
    }

    /// Returns `true` if `point` is one of the triangle's members.
    #[must_use]
    pub fn contains(&self, point: PointId) -> bool {
        self.points.contains(&point)
    }
}
