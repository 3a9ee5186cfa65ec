use collagekit_core::{Layout, Point, Rect};

/// Manages item selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking which item is the "primary" selected item
/// - Handling point-based selection (clicking on items)
/// - Handling rectangle-based selection (drag-select)
/// - Multi-select operations (Shift+click)
///
/// # Selection Model
///
/// - **Primary Selection**: the last item clicked, reported by [`primary_id`](Self::primary_id)
/// - **Multiple Selection**: every selected id, in selection order
/// - **Multi-select**: holding Shift toggles an item without deselecting others
///
/// Selection is kept by item id, so it survives layout replacement. Ids that no
/// longer exist are dropped by [`retain_existing`](Self::retain_existing).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    /// Selected item ids, oldest first
    selected: Vec<String>,
    /// The ID of the primary selected item, if any
    primary: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use collagekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of the primary selected item.
    pub fn primary_id(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Selected ids, oldest first.
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Selects every item of the layout.
    ///
    /// The primary selection becomes the topmost item in stacking order.
    pub fn select_all(&mut self, layout: &Layout) {
        let ordered = layout.stacking_order();
        self.selected = ordered.iter().map(|i| i.id.clone()).collect();
        self.primary = ordered.last().map(|i| i.id.clone());
    }

    /// Selects the topmost item at the given point.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to select from
    /// * `point` - The point to test for selection
    /// * `multi` - If `true`, enables multi-select mode (Shift+click behavior)
    ///
    /// # Multi-select Behavior
    ///
    /// - If `multi` is `false`: Deselects all other items before selecting
    /// - If `multi` is `true`: Toggles selection without affecting other items
    ///
    /// # Returns
    ///
    /// The primary selection after the click.
    pub fn select_at(&mut self, layout: &Layout, point: &Point, multi: bool) -> Option<&str> {
        let hit = layout
            .stacking_order()
            .into_iter()
            .rev()
            .find(|i| i.rect().contains_point(point.x, point.y))
            .map(|i| i.id.clone());

        if !multi {
            self.deselect_all();
        }

        match hit {
            Some(id) if multi && self.is_selected(&id) => {
                self.selected.retain(|s| *s != id);
                if self.primary.as_deref() == Some(id.as_str()) {
                    self.primary = self.selected.last().cloned();
                }
            }
            Some(id) => {
                self.selected.push(id.clone());
                self.primary = Some(id);
            }
            // Clicking empty space without Shift already cleared the selection.
            None => {}
        }

        self.primary.as_deref()
    }

    /// Selects all items that intersect with the given rectangle.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to select from
    /// * `a`, `b` - Opposite corners of the drag rectangle, in any order
    /// * `multi` - If `true`, adds to existing selection; if `false`, replaces it
    pub fn select_in_rect(&mut self, layout: &Layout, a: Point, b: Point, multi: bool) {
        if !multi {
            self.deselect_all();
        }
        let area = Rect::from_corners(a, b);

        for item in layout.stacking_order() {
            if area.intersects(&item.rect()) && !self.is_selected(&item.id) {
                self.selected.push(item.id.clone());
                if self.primary.is_none() {
                    self.primary = Some(item.id.clone());
                }
            }
        }
    }

    /// Selects an item by ID.
    ///
    /// Unknown ids are ignored.
    pub fn select_id(&mut self, layout: &Layout, id: &str, multi: bool) {
        if !multi {
            self.deselect_all();
        }
        if layout.contains(id) {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
            self.primary = Some(id.to_string());
        }
    }

    /// Drops ids that are no longer in `layout`.
    pub fn retain_existing(&mut self, layout: &Layout) {
        self.selected.retain(|id| layout.contains(id));
        if self.primary.as_deref().is_some_and(|id| !layout.contains(id)) {
            self.primary = self.selected.last().cloned();
        }
    }
}
