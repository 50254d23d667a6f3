//! Gallery state machine (pure).
//!
//! All state transitions are pure functions testable without a DOM.

pub mod events;
pub mod gallery_state;
pub mod registry;

pub use events::{Effect, FilteredNotice, GalleryEvent};
pub use gallery_state::GalleryState;
pub use registry::GalleryRegistry;

/// Interval the host should debounce resize events to before emitting
/// [`GalleryEvent::Resized`], in ms. Uncoalesced resizes thrash the layout.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;
