//! tessella
//!
//! Headless engine for filterable media galleries: multi-filter matching
//! with AND/OR logic and hierarchy expansion, masonry/packed mosaic layout
//! (shortest-column-first bin packing), FLIP-style transition planning, and
//! a load-more / infinite / numbered pagination state machine.
//!
//! The engine follows a Pure Core / Impure Shell split: everything here is
//! deterministic state and geometry. The host owns the DOM, the network,
//! and all timers; it feeds [`state::GalleryEvent`]s in and executes the
//! returned [`state::Effect`]s.

pub mod anim;
pub mod filter;
pub mod layout;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod render;
pub mod state;
