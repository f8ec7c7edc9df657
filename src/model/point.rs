use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a point in the model store.
    pub struct PointId;
}

/// Data associated with a user-placed point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointData {
    /// Display name, e.g. `P3`.
    pub name: String,
    /// The 3D position of the point.
    pub position: Point3,
}

impl PointData {
    /// Creates a new named point at the given position.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A create-or-update record for a point, as submitted by a point form.
///
/// With `id` set to a live point the record replaces that point's name and
/// position; with `id == None` a new point is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PointInput {
    pub id: Option<PointId>,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PointInput {
    /// Record for a brand-new point.
    #[must_use]
    pub fn create(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            x,
            y,
            z,
        }
    }

    /// Record replacing the point `id`.
    #[must_use]
    pub fn update(id: PointId, name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            x,
            y,
            z,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}
