//! Pagination state machine: load-more, infinite, and numbered modes.
//!
//! The controller owns three counters the rest of the engine must never
//! contradict: the server-authoritative `total` for the current filter, the
//! set of `loaded` item ids, and the `current_page`. Fetch modes talk to an
//! external endpoint through [`FetchRequest`]/[`FetchResponse`]; the server,
//! not the client, decides batch membership (the request carries the set of
//! already-loaded ids, because numeric offsets stop meaning anything once
//! filtering has trimmed the loaded set). Numbered mode never fetches: it
//! re-slices the already-loaded, filter-visible list.
//!
//! Remaining/exhaustion are per *filter*, not per gallery: `total` counts the
//! current filter's population, so it must be compared against the loaded
//! items matching that filter. Only the caller can tally loaded ids against
//! item tags, so the per-filter loaded count is an argument, never cached
//! here.

use crate::model::{FetchError, FilterLogic, FilterSlug, GalleryId, ItemId, PaginationMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, error, warn};

/// Parameters for one batch fetch against the external endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchRequest {
    /// Which gallery the batch is for.
    pub gallery: GalleryId,
    /// 1-based page being requested.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Comma-joined active filter slugs, or `"*"` for all.
    pub filters: String,
    /// AND/OR logic the server should filter with.
    pub logic: FilterLogic,
    /// Security token from the gallery settings, if any.
    pub nonce: Option<String>,
    /// Ids already present client-side; the server must exclude them.
    pub exclude: Vec<ItemId>,
}

/// The endpoint's answer to a [`FetchRequest`].
///
/// The engine adopts `total` (when the response still answers the current
///// filter context) and recomputes remaining counts client-side: the server's
/// `loaded`/`remaining` tallies can drift from the client's once duplicate
/// ids are dropped during reconciliation. `has_more` exists for the host's
/// trigger UI, which may hide the button before the next reducer pass.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FetchResponse {
    /// Rendered item markup to append (pre-filtered server-side).
    pub html: String,
    /// Whether more items exist beyond this batch.
    pub has_more: bool,
    /// Items still unloaded for the current filter, after this batch.
    pub remaining: u64,
    /// Total items for the current filter.
    pub total: u64,
    /// Items loaded including this batch, as the server counts them.
    pub loaded: u64,
}

impl FetchResponse {
    /// Parse a response body, mapping serde failures to [`FetchError`].
    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        serde_json::from_str(raw).map_err(|err| FetchError::MalformedBody {
            message: err.to_string(),
        })
    }
}

/// Join active filters for the wire: `"*"` when empty, else comma-joined.
pub fn filter_param(active: &BTreeSet<FilterSlug>) -> String {
    if active.is_empty() {
        "*".to_string()
    } else {
        active
            .iter()
            .map(FilterSlug::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Number of pages needed for `visible` items at `per_page` (at least 1).
pub fn total_pages(visible: usize, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as usize;
    (visible.div_ceil(per_page)).max(1) as u32
}

/// Slice the filter-visible list for numbered mode.
///
/// Returns the ids on `page` (1-based) and the ids to mark paginated-hidden.
/// Pages beyond the end return an empty shown list.
pub fn page_slice(visible: &[ItemId], page: u32, per_page: u32) -> (Vec<ItemId>, Vec<ItemId>) {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1) * per_page;
    let end = (start + per_page).min(visible.len());
    let shown: Vec<ItemId> = if start < visible.len() {
        visible[start..end].to_vec()
    } else {
        Vec::new()
    };
    let hidden = visible
        .iter()
        .filter(|id| !shown.contains(id))
        .cloned()
        .collect();
    (shown, hidden)
}

/// Per-gallery pagination state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    mode: PaginationMode,
    items_per_page: u32,
    /// Server-authoritative total for the *current* filter.
    total: u64,
    /// Ids present in the DOM. Grows monotonically within a page session.
    loaded: BTreeSet<ItemId>,
    /// 1-based page counter (last fetched page, or selected page in numbered mode).
    current_page: u32,
    /// Re-entrancy guard: true while a fetch is outstanding.
    in_flight: bool,
    /// Wire filter string of the outstanding fetch. A response answering a
    /// superseded filter must not clobber the current total.
    in_flight_filters: Option<String>,
}

impl PaginationState {
    /// Create state for a gallery with the given mode, page size, and
    /// unfiltered total.
    pub fn new(mode: PaginationMode, items_per_page: u32, total: u64) -> Self {
        Self {
            mode,
            items_per_page,
            total,
            loaded: BTreeSet::new(),
            current_page: 1,
            in_flight: false,
            in_flight_filters: None,
        }
    }

    /// Record the initially rendered items (page 1, server-rendered).
    pub fn record_initial<I: IntoIterator<Item = ItemId>>(&mut self, ids: I) {
        self.loaded.extend(ids);
    }

    /// The pagination mode.
    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Configured page size.
    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Server-authoritative total for the current filter.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Update the authoritative total when the filter context changes.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Number of items loaded client-side.
    pub fn loaded_count(&self) -> u64 {
        self.loaded.len() as u64
    }

    /// Whether `id` is already loaded.
    pub fn is_loaded(&self, id: &ItemId) -> bool {
        self.loaded.contains(id)
    }

    /// Items the server still holds for the current filter:
    /// `total - loaded_for_filter`, saturating.
    ///
    /// `loaded_for_filter` is the count of loaded items *matching the active
    /// filters*, not the size of the whole loaded set; after a filter change
    /// the two differ, and only the former keeps remaining-count displays
    /// honest. It is recomputed by the caller, never cached here.
    pub fn remaining(&self, loaded_for_filter: u64) -> u64 {
        self.total.saturating_sub(loaded_for_filter)
    }

    /// Whether everything the server has for the current filter is loaded.
    pub fn is_exhausted(&self, loaded_for_filter: u64) -> bool {
        loaded_for_filter >= self.total
    }

    /// Whether a fetch is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Select a page in numbered mode (no fetch; clamped to >= 1).
    pub fn select_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Reset to page 1 (numbered mode, after a filter change).
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }

    /// Build the next batch request, arming the in-flight guard.
    ///
    /// `loaded_for_filter` is the count of already-loaded items matching the
    /// active filters (see [`PaginationState::remaining`]). Returns `None` -
    /// and must be rendered as a hidden trigger - when the mode does not
    /// fetch, everything the server holds for this filter is loaded, or a
    /// fetch is already outstanding (duplicate-trigger suppression).
    pub fn request_next(
        &mut self,
        gallery: &GalleryId,
        active: &BTreeSet<FilterSlug>,
        logic: FilterLogic,
        nonce: Option<&str>,
        loaded_for_filter: u64,
    ) -> Option<FetchRequest> {
        if !self.mode.fetches() || self.in_flight || self.is_exhausted(loaded_for_filter) {
            return None;
        }
        self.in_flight = true;
        let request = FetchRequest {
            gallery: gallery.clone(),
            page: self.current_page + 1,
            per_page: self.items_per_page,
            filters: filter_param(active),
            logic,
            nonce: nonce.map(str::to_string),
            exclude: self.loaded.iter().cloned().collect(),
        };
        self.in_flight_filters = Some(request.filters.clone());
        debug!(page = request.page, filters = %request.filters, "requesting next batch");
        Some(request)
    }

    /// Reconcile a successful batch: dedupe, count, clear the guard.
    ///
    /// `current_filters` is the wire filter string for the *now* active set
    /// (see [`filter_param`]). If the filter changed while the fetch was
    /// outstanding, the response's `total` answers the old filter and is
    /// discarded; the items themselves are still reconciled, since their
    /// markup has already been appended.
    ///
    /// Returns the ids that were actually new (in arrival order); ids the
    /// client already held are dropped, so double-delivery never inflates
    /// the loaded count.
    pub fn apply_response(
        &mut self,
        response: &FetchResponse,
        ids: Vec<ItemId>,
        current_filters: &str,
    ) -> Vec<ItemId> {
        let fresh: Vec<ItemId> = ids
            .into_iter()
            .filter(|id| self.loaded.insert(id.clone()))
            .collect();
        match self.in_flight_filters.take() {
            Some(issued) if issued != current_filters => {
                warn!(
                    issued = %issued,
                    current = %current_filters,
                    "batch answered a superseded filter; keeping current total"
                );
            }
            _ => self.total = response.total,
        }
        self.current_page += 1;
        self.in_flight = false;
        debug!(
            new = fresh.len(),
            loaded = self.loaded.len(),
            total = self.total,
            "batch applied"
        );
        fresh
    }

    /// Record a failed fetch: clear the guard, mutate nothing else.
    ///
    /// The user may retry via the same trigger; no automatic retry/backoff.
    pub fn fetch_failed(&mut self, err: &FetchError) {
        error!(error = %err, "batch fetch failed; state unchanged");
        self.in_flight = false;
        self.in_flight_filters = None;
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
