//! Discrete events consumed by the gallery reducer, and the effects it emits.
//!
//! The host translates raw interaction (clicks, input, intersection
//! callbacks, measured images, resizes) into [`GalleryEvent`]s and executes
//! the returned [`Effect`]s. State never leaks out mid-transition: an event
//! is applied atomically and the effects describe everything the host must
//! do afterwards.

use crate::anim::TransitionPlan;
use crate::model::{FetchError, FilterLogic, FilterSlug, GalleryId, Item, ItemId};
use crate::pagination::{FetchRequest, FetchResponse};
use std::collections::BTreeSet;

/// An interaction or environment change routed to one gallery.
#[derive(Debug)]
pub enum GalleryEvent {
    /// A filter button was clicked. Toggles in multi-select, replaces otherwise.
    FilterToggled(FilterSlug),
    /// The "All" button: clear every active filter.
    FiltersCleared,
    /// The search input changed.
    SearchChanged(String),
    /// The load-more button was clicked.
    LoadMoreRequested,
    /// The infinite-scroll sentinel intersected the viewport.
    EndReached,
    /// A numbered-pagination button was clicked (1-based).
    PageSelected(u32),
    /// A fetched batch arrived and its markup was appended to the DOM.
    ItemsLoaded {
        /// The parsed endpoint response.
        response: FetchResponse,
        /// Items parsed from the appended markup, in arrival order.
        items: Vec<Item>,
    },
    /// A batch fetch failed (network, status, or body shape).
    FetchFailed(FetchError),
    /// An image finished loading (or timed out) and was measured.
    ItemMeasured {
        /// The measured item.
        id: ItemId,
        /// Measured width/height ratio, if available.
        aspect: Option<f32>,
        /// Measured caption block height, if any.
        caption_height: Option<f32>,
    },
    /// The container was resized (host debounces; see [`super::RESIZE_DEBOUNCE_MS`]).
    Resized {
        /// New container width in px.
        container_width: f32,
    },
}

/// The payload of the public "filtered" notification.
///
/// Dispatched after every completed transition so external listeners
/// (lightbox, analytics) can react to the new visible set.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredNotice {
    /// The gallery that changed.
    pub gallery: GalleryId,
    /// Active filter slugs after the change.
    pub active: BTreeSet<FilterSlug>,
    /// Logic the filters were combined with.
    pub logic: FilterLogic,
    /// Current search term (possibly empty).
    pub search: String,
    /// Number of items now visible.
    pub visible_count: usize,
}

/// Side effects the host must execute, in order, after an update.
#[derive(Debug)]
pub enum Effect {
    /// Issue this batch request against the endpoint.
    Fetch(FetchRequest),
    /// Execute this transition plan phase by phase.
    Transition(TransitionPlan),
    /// CSS-driven layout: snapshot rects of surviving items, apply the
    /// visibility classes for the diff, snapshot again, then build and run
    /// the plan via [`crate::anim::plan_flip`].
    SnapshotAndFlip {
        /// Items leaving visibility.
        leaving: Vec<ItemId>,
        /// Items entering visibility.
        entering: Vec<ItemId>,
    },
    /// Dispatch the public "filtered" notification.
    Notify(FilteredNotice),
}
