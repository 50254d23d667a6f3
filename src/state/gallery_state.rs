//! Per-gallery canonical state and its reducer.
//!
//! `GalleryState` owns everything the engine knows about one gallery:
//! items, active filters, search term, pagination counters, and the last
//! computed layout. [`GalleryState::update`] is the single entry point for
//! interaction: it applies the event atomically and returns the effects the
//! host must execute. Visibility is always re-derived from canonical state
//! at the start of an operation, never read back from classes, so an event
//! arriving mid-animation cannot corrupt anything.

use crate::anim::{LOAD_STAGGER_MS, SHOW_STAGGER_MS, TransitionStrategy, plan_reflow};
use crate::filter;
use crate::layout::{LayoutParams, LayoutResult, layout};
use crate::model::{
    FilterHierarchy, FilterSlug, GalleryId, GallerySettings, Item, ItemId, PaginationMode,
};
use crate::pagination::{PaginationState, filter_param, page_slice, total_pages};
use crate::state::events::{Effect, FilteredNotice, GalleryEvent};
use std::collections::BTreeSet;
use tracing::debug;

/// Canonical state for one gallery container.
#[derive(Debug, Clone)]
pub struct GalleryState {
    id: GalleryId,
    settings: GallerySettings,
    hierarchy: FilterHierarchy,
    /// All items ever loaded, in render order. Never shrinks.
    items: Vec<Item>,
    active: BTreeSet<FilterSlug>,
    search: String,
    pagination: PaginationState,
    container_width: f32,
    last_layout: Option<LayoutResult>,
}

impl GalleryState {
    /// Initialize from parsed settings; applies the configured default filter.
    pub fn new(
        id: GalleryId,
        settings: GallerySettings,
        hierarchy: FilterHierarchy,
        container_width: f32,
    ) -> Self {
        let mut active = BTreeSet::new();
        if let Some(default) = &settings.default_filter {
            active.insert(default.clone());
        }
        let pagination = PaginationState::new(
            settings.pagination,
            settings.items_per_page,
            settings.total_items,
        );
        Self {
            id,
            settings,
            hierarchy,
            items: Vec::new(),
            active,
            search: String::new(),
            pagination,
            container_width,
            last_layout: None,
        }
    }

    /// Apply a deep-linked filter value (the URL parameter's raw value,
    /// comma-joined slugs). No-op unless deep linking is enabled.
    pub fn apply_deep_link(&mut self, raw: &str) {
        if !self.settings.deep_link {
            return;
        }
        self.active = raw
            .split(',')
            .filter_map(|s| FilterSlug::new(s.trim()).ok())
            .collect();
    }

    /// Register the server-rendered initial items.
    pub fn register_items(&mut self, items: Vec<Item>) {
        self.pagination
            .record_initial(items.iter().map(|i| i.id.clone()));
        self.items.extend(items);
    }

    /// The gallery's id.
    pub fn id(&self) -> &GalleryId {
        &self.id
    }

    /// The parsed settings.
    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    /// Currently active filter slugs (empty = "All").
    pub fn active_filters(&self) -> &BTreeSet<FilterSlug> {
        &self.active
    }

    /// Current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// All loaded items, in render order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Pagination counters.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Update the server-authoritative total for the current filter context
    /// (e.g. from a count endpoint after a filter change).
    pub fn set_filter_total(&mut self, total: u64) {
        self.pagination.set_total(total);
    }

    /// The last computed layout, if this gallery is engine-positioned.
    pub fn layout_result(&self) -> Option<&LayoutResult> {
        self.last_layout.as_ref()
    }

    /// Items the server still holds for the active filter.
    ///
    /// Remaining counts are per filter: the loaded set may span several
    /// filters, but the server's total counts only the current one, so the
    /// comparison uses the loaded items matching it.
    pub fn remaining(&self) -> u64 {
        self.pagination.remaining(self.filter_loaded_count())
    }

    /// Count of loaded items matching the active filters. Search is ignored:
    /// the fetch protocol's totals are per-filter, not per-search-term.
    fn filter_loaded_count(&self) -> u64 {
        self.items
            .iter()
            .filter(|i| filter::matches(i, &self.active, self.settings.logic, &self.hierarchy))
            .count() as u64
    }

    /// Items passing filter + search, ignoring pagination. Input order.
    pub fn filter_visible(&self) -> Vec<&Item> {
        filter::visible_items(
            self.items.iter(),
            &self.active,
            self.settings.logic,
            &self.hierarchy,
            &self.search,
        )
    }

    /// Ids visible right now: filter + search, then the numbered page slice.
    pub fn visible_ids(&self) -> Vec<ItemId> {
        let filtered: Vec<ItemId> = self
            .filter_visible()
            .iter()
            .map(|i| i.id.clone())
            .collect();
        match self.pagination.mode() {
            PaginationMode::Numbered => {
                let (shown, _hidden) = page_slice(
                    &filtered,
                    self.pagination.current_page(),
                    self.pagination.items_per_page(),
                );
                shown
            }
            _ => filtered,
        }
    }

    /// Recompute the layout over the current visible set.
    ///
    /// Public so hosts can force recomputation after externally inserting
    /// DOM nodes. Returns `None` for CSS-driven layout kinds.
    pub fn relayout(&mut self) -> Option<&LayoutResult> {
        let params = LayoutParams::from_settings(&self.settings, self.container_width)?;
        let visible = self.visible_ids();
        let items: Vec<&Item> = visible
            .iter()
            .filter_map(|id| self.items.iter().find(|i| &i.id == id))
            .collect();
        self.last_layout = Some(layout(&items, &params));
        self.last_layout.as_ref()
    }

    /// Apply one event and return the effects the host must execute.
    pub fn update(&mut self, event: GalleryEvent) -> Vec<Effect> {
        match event {
            GalleryEvent::FilterToggled(slug) => {
                let prev = self.visible_ids();
                self.toggle_filter(slug);
                self.reset_numbered_page();
                self.transition_from(prev, SHOW_STAGGER_MS)
            }
            GalleryEvent::FiltersCleared => {
                let prev = self.visible_ids();
                self.active.clear();
                self.reset_numbered_page();
                self.transition_from(prev, SHOW_STAGGER_MS)
            }
            GalleryEvent::SearchChanged(term) => {
                let prev = self.visible_ids();
                self.search = term;
                self.reset_numbered_page();
                self.transition_from(prev, SHOW_STAGGER_MS)
            }
            GalleryEvent::LoadMoreRequested => {
                if self.pagination.mode() != PaginationMode::LoadMore {
                    return Vec::new();
                }
                self.next_batch_request()
            }
            GalleryEvent::EndReached => {
                if self.pagination.mode() != PaginationMode::Infinite {
                    return Vec::new();
                }
                self.next_batch_request()
            }
            GalleryEvent::PageSelected(page) => {
                if self.pagination.mode() != PaginationMode::Numbered {
                    return Vec::new();
                }
                let prev = self.visible_ids();
                let pages = total_pages(
                    self.filter_visible().len(),
                    self.pagination.items_per_page(),
                );
                self.pagination.select_page(page.min(pages));
                self.transition_from(prev, SHOW_STAGGER_MS)
            }
            GalleryEvent::ItemsLoaded { response, items } => {
                let prev = self.visible_ids();
                let ids: Vec<ItemId> = items.iter().map(|i| i.id.clone()).collect();
                let fresh =
                    self.pagination
                        .apply_response(&response, ids, &filter_param(&self.active));
                let new_items: Vec<Item> = items
                    .into_iter()
                    .filter(|i| fresh.contains(&i.id))
                    .collect();
                self.items.extend(new_items);
                self.transition_from(prev, LOAD_STAGGER_MS)
            }
            GalleryEvent::FetchFailed(err) => {
                self.pagination.fetch_failed(&err);
                Vec::new()
            }
            GalleryEvent::ItemMeasured {
                id,
                aspect,
                caption_height,
            } => {
                if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                    if aspect.is_some() {
                        item.aspect = aspect;
                    }
                    if caption_height.is_some() {
                        item.caption_height = caption_height;
                    }
                }
                self.relayout_only()
            }
            GalleryEvent::Resized { container_width } => {
                self.container_width = container_width;
                self.relayout_only()
            }
        }
    }

    fn toggle_filter(&mut self, slug: FilterSlug) {
        if self.settings.multi_select {
            if !self.active.remove(&slug) {
                self.active.insert(slug);
            }
        } else if self.active.contains(&slug) {
            // Re-clicking the lone active filter returns to "All".
            self.active.clear();
        } else {
            self.active.clear();
            self.active.insert(slug);
        }
    }

    fn reset_numbered_page(&mut self) {
        if self.pagination.mode() == PaginationMode::Numbered {
            self.pagination.reset_to_first_page();
        }
    }

    fn next_batch_request(&mut self) -> Vec<Effect> {
        let loaded_for_filter = self.filter_loaded_count();
        let request = self.pagination.request_next(
            &self.id,
            &self.active,
            self.settings.logic,
            self.settings.nonce.as_deref(),
            loaded_for_filter,
        );
        match request {
            Some(request) => vec![Effect::Fetch(request)],
            None => Vec::new(),
        }
    }

    /// Diff visibility against `prev`, recompute layout for positioned
    /// kinds, and emit the transition + notification effects.
    fn transition_from(&mut self, prev: Vec<ItemId>, stagger_ms: u32) -> Vec<Effect> {
        let next = self.visible_ids();
        let next_set: BTreeSet<&ItemId> = next.iter().collect();
        let prev_set: BTreeSet<&ItemId> = prev.iter().collect();
        let leaving: Vec<ItemId> = prev
            .iter()
            .filter(|id| !next_set.contains(id))
            .cloned()
            .collect();
        let entering: Vec<ItemId> = next
            .iter()
            .filter(|id| !prev_set.contains(id))
            .cloned()
            .collect();
        debug!(
            gallery = %self.id,
            visible = next.len(),
            leaving = leaving.len(),
            entering = entering.len(),
            "visibility transition"
        );

        let strategy = TransitionStrategy::for_layout(self.settings.layout);
        let mut effects = Vec::new();
        match strategy {
            TransitionStrategy::Reflow => {
                self.relayout();
                effects.push(Effect::Transition(plan_reflow(leaving, entering, stagger_ms)));
            }
            TransitionStrategy::Flip => {
                effects.push(Effect::SnapshotAndFlip { leaving, entering });
            }
        }
        effects.push(Effect::Notify(FilteredNotice {
            gallery: self.id.clone(),
            active: self.active.clone(),
            logic: self.settings.logic,
            search: self.search.clone(),
            visible_count: next.len(),
        }));
        effects
    }

    /// Relayout without a visibility diff (measurement, resize).
    fn relayout_only(&mut self) -> Vec<Effect> {
        if !self.settings.layout.is_positioned() {
            return Vec::new();
        }
        self.relayout();
        vec![Effect::Transition(plan_reflow(
            Vec::new(),
            Vec::new(),
            SHOW_STAGGER_MS,
        ))]
    }
}

#[cfg(test)]
#[path = "gallery_state_tests.rs"]
mod tests;
