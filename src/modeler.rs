//! Application state of the point modeler and the actions that mutate it.

use crate::error::{ModelerError, Result};
use crate::math::Point3;
use crate::model::{ModelStore, PointData, PointId, PointInput, TriangleData, TriangleId};
use crate::operations::query::{Angle, Distance};
use crate::selection::Selection;
use crate::settings::ModelerSettings;

const HINT_MEASURE: &str = "Select 2 points for distance, or 3 for angle/triangle.";
const HINT_SHAPES: &str = "Select points for calculations or to form new shapes.";
const HINT_CLICK_FIRST: &str = "Click on the grid to add points.";
const HINT_CLICK_MORE: &str = "Click on the grid to add more points.";
const HINT_ENABLE_CLICK: &str = "Enable 'Click-to-Add' to place points on grid.";

/// Result of a click on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneClick {
    /// Click-to-add is disabled; nothing happened.
    Ignored,
    /// The click hit an existing point and toggled its selection.
    Toggled(PointId),
    /// A new point was created and selected.
    Created(PointId),
}

/// A user action, applied with [`Modeler::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpsertPoint(PointInput),
    DeletePoint(PointId),
    ToggleSelection(PointId),
    ClearSelection,
    BeginEdit(PointId),
    CancelEdit,
    ClickScene(Point3),
    SetClickToAdd(bool),
    ToggleClickToAdd,
    CreateTriangle,
    DeleteTriangle(TriangleId),
}

/// What an [`Action`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Point(PointId),
    Triangle(TriangleId),
    Scene(SceneClick),
    /// The action only changed selection, edit or toggle state.
    Done,
}

/// Single owner of the modeler's in-memory state.
///
/// Every method is a synchronous transition; there is no hidden state
/// outside this struct.
#[derive(Debug)]
pub struct Modeler {
    store: ModelStore,
    selection: Selection,
    editing: Option<PointId>,
    click_to_add: bool,
    settings: ModelerSettings,
}

impl Default for Modeler {
    fn default() -> Self {
        Self::new(ModelerSettings::default())
    }
}

impl Modeler {
    /// Creates an empty modeler.
    #[must_use]
    pub fn new(settings: ModelerSettings) -> Self {
        Self {
            store: ModelStore::new(),
            selection: Selection::new(),
            editing: None,
            click_to_add: settings.click_to_add,
            settings,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Settings the modeler was created with.
    #[must_use]
    pub fn settings(&self) -> &ModelerSettings {
        &self.settings
    }

    /// Currently selected point ids, oldest first.
    #[must_use]
    pub fn selection(&self) -> &[PointId] {
        self.selection.as_slice()
    }

    /// The point whose edit form is open, if any.
    #[must_use]
    pub fn editing(&self) -> Option<PointId> {
        self.editing
    }

    #[must_use]
    pub fn click_to_add(&self) -> bool {
        self.click_to_add
    }

    /// Iterates over all points in creation order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> + '_ {
        self.store.points()
    }

    /// Iterates over all triangles in creation order.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &TriangleData)> + '_ {
        self.store.triangles()
    }

    // --- Reducer ---

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Propagates the error of the corresponding method; state is unchanged
    /// on error.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::UpsertPoint(input) => self.upsert_point(input).map(Outcome::Point),
            Action::DeletePoint(id) => self.delete_point(id).map(|_| Outcome::Done),
            Action::ToggleSelection(id) => self.toggle_selection(id).map(|_| Outcome::Done),
            Action::ClearSelection => {
                self.clear_selection();
                Ok(Outcome::Done)
            }
            Action::BeginEdit(id) => self.begin_edit(id).map(|_| Outcome::Done),
            Action::CancelEdit => {
                self.cancel_edit();
                Ok(Outcome::Done)
            }
            Action::ClickScene(position) => self.click_scene(position).map(Outcome::Scene),
            Action::SetClickToAdd(enabled) => {
                self.set_click_to_add(enabled);
                Ok(Outcome::Done)
            }
            Action::ToggleClickToAdd => {
                self.toggle_click_to_add();
                Ok(Outcome::Done)
            }
            Action::CreateTriangle => self.create_triangle().map(Outcome::Triangle),
            Action::DeleteTriangle(id) => self.delete_triangle(id).map(|_| Outcome::Done),
        }
    }

    // --- Points ---

    /// Creates a point, or replaces the name and position of an existing one
    /// when `input.id` is set. Closes any open edit.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if `input.id` names a point
    /// that no longer exists.
    pub fn upsert_point(&mut self, input: PointInput) -> Result<PointId> {
        let position = input.position();
        let id = if let Some(id) = input.id {
            let point = self.store.point_mut(id)?;
            point.name = input.name;
            point.position = position;
            tracing::debug!(?id, name = %point.name, "updated point");
            id
        } else {
            let id = self.store.add_point(PointData::new(input.name, position));
            tracing::debug!(?id, x = position.x, y = position.y, z = position.z, "created point");
            id
        };
        self.editing = None;
        Ok(id)
    }

    /// Deletes a point, drops it from the selection and removes every
    /// triangle that uses it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point does not exist.
    pub fn delete_point(&mut self, id: PointId) -> Result<PointData> {
        let removed = self.store.remove_point(id)?;
        self.selection.remove(id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        tracing::debug!(
            ?id,
            triangles_removed = removed.triangles.len(),
            "deleted point"
        );
        Ok(removed.point)
    }

    // --- Selection ---

    /// Toggles a point's selection, evicting the oldest entry when three are
    /// already selected. Closes any open edit. Returns whether the point is
    /// selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point does not exist.
    pub fn toggle_selection(&mut self, id: PointId) -> Result<bool> {
        self.store.point(id)?;
        let selected = self.selection.toggle(id);
        self.editing = None;
        tracing::debug!(?id, selected, len = self.selection.len(), "toggled selection");
        Ok(selected)
    }

    /// Deselects every point. Closes any open edit, like a toggle does.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.editing = None;
        tracing::debug!("cleared selection");
    }

    // --- Editing ---

    /// Opens the edit form for a point. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::PointNotFound`] if the point does not exist.
    pub fn begin_edit(&mut self, id: PointId) -> Result<&PointData> {
        let point = self.store.point(id)?;
        self.editing = Some(id);
        self.selection.clear();
        Ok(point)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // --- Scene ---

    /// Handles a click on the scene at `position`.
    ///
    /// A click within the snap tolerance of an existing point toggles that
    /// point. Otherwise a new auto-named point is created and appended to the
    /// selection.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` matches the other actions.
    pub fn click_scene(&mut self, position: Point3) -> Result<SceneClick> {
        if !self.click_to_add {
            return Ok(SceneClick::Ignored);
        }
        if let Some(hit) = self
            .store
            .find_point_near(&position, self.settings.snap_tolerance)
        {
            self.toggle_selection(hit)?;
            return Ok(SceneClick::Toggled(hit));
        }

        let name = format!(
            "{}{}",
            self.settings.point_name_prefix,
            self.store.point_count() + 1
        );
        let id = self.upsert_point(PointInput {
            id: None,
            name,
            x: position.x,
            y: position.y,
            z: position.z,
        })?;
        if let Some(evicted) = self.selection.push_evicting(id) {
            tracing::debug!(?evicted, "selection full, evicted oldest");
        }
        Ok(SceneClick::Created(id))
    }

    pub fn set_click_to_add(&mut self, enabled: bool) {
        self.click_to_add = enabled;
    }

    pub fn toggle_click_to_add(&mut self) -> bool {
        self.click_to_add = !self.click_to_add;
        self.click_to_add
    }

    // --- Triangles ---

    /// Groups the three selected points into a new triangle and clears the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::IncompleteSelection`] unless exactly three
    /// points are selected.
    pub fn create_triangle(&mut self) -> Result<TriangleId> {
        let Some(ids) = self.selection.as_triple() else {
            return Err(ModelerError::IncompleteSelection {
                len: self.selection.len(),
            });
        };
        let [a, b, c] = ids;
        let name = format!(
            "{} {} ({}, {}, {})",
            self.settings.triangle_name_prefix,
            self.store.triangle_count() + 1,
            self.store.point(a)?.name,
            self.store.point(b)?.name,
            self.store.point(c)?.name,
        );
        let id = self.store.add_triangle(TriangleData::new(ids, name))?;
        self.selection.clear();
        tracing::debug!(?id, "created triangle");
        Ok(id)
    }

    /// Deletes a triangle. Its points stay.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::TriangleNotFound`] if the triangle does not exist.
    pub fn delete_triangle(&mut self, id: TriangleId) -> Result<TriangleData> {
        let data = self.store.remove_triangle(id)?;
        tracing::debug!(?id, "deleted triangle");
        Ok(data)
    }

    // --- Derived outputs ---

    /// Distance between the two selected points, when exactly two are selected.
    #[must_use]
    pub fn selected_distance(&self) -> Option<f64> {
        let [a, b] = self.selection.as_pair()?;
        Distance::new(a, b).execute(&self.store).ok()
    }

    /// Angle in degrees between the three selected points, when exactly three
    /// are selected. The vertex is chosen by
    /// [`ModelerSettings::angle_vertex`]. May be NaN for coincident points.
    #[must_use]
    pub fn selected_angle(&self) -> Option<f64> {
        let triple = self.selection.as_triple()?;
        let [a, vertex, c] = self.settings.angle_vertex.arrange(triple);
        Angle::new(a, vertex, c).execute(&self.store).ok()
    }

    /// Status hint shown when no measurement is on display, as a headline
    /// and a follow-up line.
    #[must_use]
    pub fn hint(&self) -> Option<[&'static str; 2]> {
        if self.editing.is_some() || matches!(self.selection.len(), 2 | 3) {
            return None;
        }
        let first = self.store.triangle_count() == 0;
        let headline = if first { HINT_MEASURE } else { HINT_SHAPES };
        let follow_up = match (first, self.click_to_add) {
            (true, true) => HINT_CLICK_FIRST,
            (false, true) => HINT_CLICK_MORE,
            (_, false) => HINT_ENABLE_CLICK,
        };
        Some([headline, follow_up])
    }
}
