//! Catalog view state: filtered sequence, selection, and visible window

use crate::dataset::{RecordId, RecordStore};

use super::criteria::FilterCriteria;
use super::engine;

/// Rows shown on first render and added per "load more"
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// What to do with the selection after a filter application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    /// Keep the selection if it survived, clear it otherwise
    #[default]
    Keep,
    /// Additionally select the first result when there is one
    AutoSelectFirst,
}

/// Explicit application state for the parcel list.
///
/// Invariant: `selection`, when set, is always an element of `filtered`,
/// and `visible` never exceeds `filtered.len()`.
#[derive(Debug, Clone)]
pub struct CatalogState {
    criteria: FilterCriteria,
    filtered: Vec<RecordId>,
    selection: Option<RecordId>,
    visible: usize,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            selection: None,
            visible: 0,
            page_size: page_size.max(1),
        }
    }

    /// Recompute the filtered sequence and reset the window to the first page.
    ///
    /// A selection that is no longer part of the result is cleared.
    pub fn apply_filters(
        &mut self,
        store: &RecordStore,
        criteria: FilterCriteria,
        mode: ApplyMode,
    ) -> &[RecordId] {
        self.filtered = engine::apply(store, &criteria);
        self.criteria = criteria;
        self.visible = self.page_size.min(self.filtered.len());

        if let Some(selected) = self.selection {
            if !self.filtered.contains(&selected) {
                tracing::debug!(record = selected.index(), "selection_cleared");
                self.selection = None;
            }
        }

        if mode == ApplyMode::AutoSelectFirst {
            if let Some(first) = self.filtered.first() {
                self.selection = Some(*first);
            }
        }

        &self.filtered
    }

    /// Clear criteria and selection, then show everything with the first
    /// record selected.
    pub fn reset(&mut self, store: &RecordStore) -> &[RecordId] {
        self.selection = None;
        self.apply_filters(store, FilterCriteria::default(), ApplyMode::AutoSelectFirst)
    }

    /// Grow the visible window by one page. Returns the new visible count.
    pub fn load_more(&mut self) -> usize {
        self.visible = (self.visible + self.page_size).min(self.filtered.len());
        self.visible
    }

    /// Select a record; refused unless it is part of the filtered sequence
    pub fn select(&mut self, id: RecordId) -> bool {
        if self.filtered.contains(&id) {
            self.selection = Some(id);
            true
        } else {
            false
        }
    }

    /// Select the n-th visible row (0-based)
    pub fn select_visible(&mut self, position: usize) -> Option<RecordId> {
        let id = self.visible().get(position).copied()?;
        self.selection = Some(id);
        Some(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<RecordId> {
        self.selection
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[RecordId] {
        &self.filtered
    }

    /// Prefix of the filtered sequence currently rendered
    pub fn visible(&self) -> &[RecordId] {
        &self.filtered[..self.visible]
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.filtered.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
