use crate::model::PointId;

/// Maximum number of simultaneously selected points.
pub const SELECTION_CAPACITY: usize = 3;

/// Ordered, duplicate-free set of at most [`SELECTION_CAPACITY`] point ids.
///
/// When full, adding another id evicts the oldest one (index 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    slots: [PointId; SELECTION_CAPACITY],
    len: usize,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == SELECTION_CAPACITY
    }

    /// Selected ids, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[PointId] {
        &self.slots[..self.len]
    }

    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.as_slice().contains(&id)
    }

    /// The three selected ids, if the selection is full.
    #[must_use]
    pub fn as_triple(&self) -> Option<[PointId; 3]> {
        match *self.as_slice() {
            [a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// The two selected ids, if exactly two are selected.
    #[must_use]
    pub fn as_pair(&self) -> Option<[PointId; 2]> {
        match *self.as_slice() {
            [a, b] => Some([a, b]),
            _ => None,
        }
    }

    /// Removes `id` if present, otherwise adds it (evicting the oldest entry
    /// when full). Returns `true` if `id` is selected afterwards.
    pub fn toggle(&mut self, id: PointId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.push_evicting(id);
            true
        }
    }

    /// Appends `id`, evicting the oldest entry when full. Returns the evicted
    /// id, if any. Does nothing if `id` is already selected.
    pub fn push_evicting(&mut self, id: PointId) -> Option<PointId> {
        if self.contains(id) {
            return None;
        }
        let evicted = if self.is_full() {
            let oldest = self.slots[0];
            self.slots.rotate_left(1);
            self.len -= 1;
            Some(oldest)
        } else {
            None
        };
        self.slots[self.len] = id;
        self.len += 1;
        evicted
    }

    /// Removes `id`, shifting later entries left. Returns `true` if it was present.
    pub fn remove(&mut self, id: PointId) -> bool {
        let Some(pos) = self.as_slice().iter().position(|&s| s == id) else {
            return false;
        };
        self.slots[pos..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = PointId::default();
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<PointId> {
        let mut map: SlotMap<PointId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn fourth_toggle_evicts_oldest() {
        let p = ids(4);
        let mut sel = Selection::new();
        for &id in &p {
            assert!(sel.toggle(id));
        }
        assert_eq!(sel.as_slice(), &[p[1], p[2], p[3]]);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn toggle_selected_removes_and_keeps_order() {
        let p = ids(3);
        let mut sel = Selection::new();
        for &id in &p {
            sel.toggle(id);
        }
        assert!(!sel.toggle(p[1]));
        assert_eq!(sel.as_slice(), &[p[0], p[2]]);

        // Re-adding appends at the end.
        sel.toggle(p[1]);
        assert_eq!(sel.as_slice(), &[p[0], p[2], p[1]]);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let p = ids(2);
        let mut sel = Selection::new();
        sel.toggle(p[0]);
        let before = sel.clone();
        sel.toggle(p[1]);
        sel.toggle(p[1]);
        assert_eq!(sel, before);
    }

    #[test]
    fn push_evicting_reports_evicted() {
        let p = ids(4);
        let mut sel = Selection::new();
        assert_eq!(sel.push_evicting(p[0]), None);
        assert_eq!(sel.push_evicting(p[1]), None);
        assert_eq!(sel.push_evicting(p[2]), None);
        assert_eq!(sel.push_evicting(p[3]), Some(p[0]));
        // Already present: no toggle, no change.
        assert_eq!(sel.push_evicting(p[3]), None);
        assert_eq!(sel.as_slice(), &[p[1], p[2], p[3]]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let p = ids(2);
        let mut sel = Selection::new();
        sel.toggle(p[0]);
        assert!(!sel.remove(p[1]));
        assert_eq!(sel.as_slice(), &[p[0]]);
    }

    #[test]
    fn pair_and_triple_views() {
        let p = ids(3);
        let mut sel = Selection::new();
        assert_eq!(sel.as_pair(), None);
        sel.toggle(p[0]);
        sel.toggle(p[1]);
        assert_eq!(sel.as_pair(), Some([p[0], p[1]]));
        assert_eq!(sel.as_triple(), None);
        sel.toggle(p[2]);
        assert_eq!(sel.as_triple(), Some([p[0], p[1], p[2]]));
        sel.clear();
        assert!(sel.is_empty());
    }
}
