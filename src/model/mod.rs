//! Domain model: identifiers, items, filters, settings, errors.
//!
//! Everything here is pure data. Measurement and visibility *derivation*
//! live in the algorithm modules ([`crate::filter`], [`crate::layout`]);
//! this module only defines the records they operate on.

pub mod error;
pub mod filter;
pub mod identifiers;
pub mod item;
pub mod settings;

pub use error::{EngineError, FetchError, HierarchyError, SettingsError};
pub use filter::{FilterDefinition, FilterHierarchy, FilterLogic};
pub use identifiers::{FilterSlug, GalleryId, InvalidIdentifier, ItemId};
pub use item::{FALLBACK_ASPECT, FALLBACK_CAPTION_HEIGHT, Item};
pub use settings::{GallerySettings, LayoutKind, PaginationMode, ResponsiveColumns};
