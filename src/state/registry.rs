//! Explicit gallery registry.
//!
//! One page can host several independent galleries. The registry maps
//! gallery ids to their state and is owned by the host's top-level
//! controller - deliberately not a global: construct it, hold it, route
//! events through it.

use crate::layout::LayoutResult;
use crate::model::{FilterHierarchy, GalleryId, GallerySettings, Item};
use crate::state::events::{Effect, GalleryEvent};
use crate::state::gallery_state::GalleryState;
use std::collections::HashMap;
use tracing::{info, warn};

/// All gallery instances on the page, keyed by id.
#[derive(Debug, Default)]
pub struct GalleryRegistry {
    galleries: HashMap<GalleryId, GalleryState>,
}

impl GalleryRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize and register a gallery from its parsed inputs.
    ///
    /// Replaces any previous registration under the same id (re-rendered
    /// container) with a warning.
    pub fn register(
        &mut self,
        id: GalleryId,
        settings: GallerySettings,
        hierarchy: FilterHierarchy,
        container_width: f32,
        initial_items: Vec<Item>,
    ) {
        let mut state = GalleryState::new(id.clone(), settings, hierarchy, container_width);
        state.register_items(initial_items);
        info!(gallery = %id, items = state.items().len(), "gallery registered");
        if self.galleries.insert(id.clone(), state).is_some() {
            warn!(gallery = %id, "replaced existing gallery registration");
        }
    }

    /// Number of registered galleries.
    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    /// Whether no gallery is registered.
    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    /// Immutable access to one gallery's state.
    pub fn get(&self, id: &GalleryId) -> Option<&GalleryState> {
        self.galleries.get(id)
    }

    /// Mutable access to one gallery's state.
    pub fn get_mut(&mut self, id: &GalleryId) -> Option<&mut GalleryState> {
        self.galleries.get_mut(id)
    }

    /// Route an event to its gallery. Unknown ids are logged and ignored
    /// (zero-match tolerance: a stale handler must not panic).
    pub fn dispatch(&mut self, id: &GalleryId, event: GalleryEvent) -> Vec<Effect> {
        match self.galleries.get_mut(id) {
            Some(state) => state.update(event),
            None => {
                warn!(gallery = %id, "event for unregistered gallery dropped");
                Vec::new()
            }
        }
    }

    /// Force layout recomputation for a gallery (public hook for hosts that
    /// insert DOM nodes outside the engine's control).
    pub fn relayout(&mut self, id: &GalleryId) -> Option<&LayoutResult> {
        self.galleries.get_mut(id)?.relayout()
    }
}
