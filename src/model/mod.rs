pub mod point;
pub mod triangle;

pub use point::{PointData, PointId, PointInput};
pub use triangle::{TriangleData, TriangleId};

use crate::error::ModelerError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns all points and triangles.
///
/// Entities are addressed by typed IDs (generational indices). Listing
/// order is insertion order, tracked separately from the slot maps.
#[derive(Debug, Default)]
pub struct ModelStore {
    points: SlotMap<PointId, PointData>,
    triangles: SlotMap<TriangleId, TriangleData>,
    point_order: Vec<PointId>,
    triangle_order: Vec<TriangleId>,
}

/// What [`ModelStore::remove_point`] took out of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedPoint {
    pub point: PointData,
    /// Triangles dropped because they referenced the point.
    pub triangles: Vec<TriangleId>,
}

impl ModelStore {
    /// Creates a new, empty model store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Point operations ---

    /// Inserts a point and returns its ID.
    pub fn add_point(&mut self, data: PointData) -> PointId {
        let id = self.points.insert(data);
        self.point_order.push(id);
        id
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point is not in the store.
    pub fn point(&self, id: PointId) -> Result<&PointData, ModelerError> {
        self.points.get(id).ok_or(ModelerError::PointNotFound)
    }

    /// Returns a mutable reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point is not in the store.
    pub fn point_mut(&mut self, id: PointId) -> Result<&mut PointData, ModelerError> {
        self.points.get_mut(id).ok_or(ModelerError::PointNotFound)
    }

    /// Returns `true` if `id` names a live point.
    #[must_use]
    pub fn contains_point(&self, id: PointId) -> bool {
        self.points.contains_key(id)
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Iterates over all points in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> + '_ {
        self.point_order
            .iter()
            .filter_map(|&id| self.points.get(id).map(|p| (id, p)))
    }

    /// Removes a point together with every triangle that references it.
    ///
    /// Triangles are dropped whole; they are never repaired with a
    /// replacement vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point is not in the store.
    pub fn remove_point(&mut self, id: PointId) -> Result<RemovedPoint, ModelerError> {
        let point = self.points.remove(id).ok_or(ModelerError::PointNotFound)?;
        self.point_order.retain(|&p| p != id);

        let doomed: Vec<TriangleId> = self
            .triangles()
            .filter(|(_, t)| t.contains(id))
            .map(|(tid, _)| tid)
            .collect();
        for &tid in &doomed {
            self.triangles.remove(tid);
        }
        self.triangle_order.retain(|t| !doomed.contains(t));

        Ok(RemovedPoint {
            point,
            triangles: doomed,
        })
    }

    /// Returns the first point (in insertion order) lying within `tolerance`
    /// of `position` on every axis.
    #[must_use]
    pub fn find_point_near(&self, position: &Point3, tolerance: f64) -> Option<PointId> {
        self.points()
            .find(|(_, p)| {
                (p.position - position)
                    .iter()
                    .all(|delta| delta.abs() < tolerance)
            })
            .map(|(id, _)| id)
    }

    // --- Triangle operations ---

    /// Inserts a triangle and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::DuplicateMember`] if a point is listed twice,
    /// or [`ModelerError::PointNotFound`] if any member point is missing.
    pub fn add_triangle(&mut self, data: TriangleData) -> Result<TriangleId, ModelerError> {
        let [a, b, c] = data.points;
        if a == b || b == c || a == c {
            return Err(ModelerError::DuplicateMember);
        }
        for &p in &data.points {
            self.point(p)?;
        }
        let id = self.triangles.insert(data);
        self.triangle_order.push(id);
        Ok(id)
    }

    /// Returns a reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::TriangleNotFound`] if the triangle is not in the store.
    pub fn triangle(&self, id: TriangleId) -> Result<&TriangleData, ModelerError> {
        self.triangles.get(id).ok_or(ModelerError::TriangleNotFound)
    }

    /// Removes a triangle. Its points are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::TriangleNotFound`] if the triangle is not in the store.
    pub fn remove_triangle(&mut self, id: TriangleId) -> Result<TriangleData, ModelerError> {
        let data = self
            .triangles
            .remove(id)
            .ok_or(ModelerError::TriangleNotFound)?;
        self.triangle_order.retain(|&t| t != id);
        Ok(data)
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterates over all triangles in insertion order.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &TriangleData)> + '_ {
        self.triangle_order
            .iter()
            .filter_map(|&id| self.triangles.get(id).map(|t| (id, t)))
    }

    /// Looks up the current positions of a triangle's three points.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its points is missing.
    pub fn resolve_triangle(&self, id: TriangleId) -> Result<[Point3; 3], ModelerError> {
        let [a, b, c] = self.triangle(id)?.points;
        Ok([
            self.point(a)?.position,
            self.point(b)?.position,
            self.point(c)?.position,
        ])
    }
}
