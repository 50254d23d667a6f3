//! Mosaic layout engine: column selection and bin-packing placement.
//!
//! Two positioned modes share the same contract:
//!
//! - **masonry**: items keep their native aspect ratio and are placed
//!   shortest-column-first (greedy bin packing - a heuristic, not an optimum;
//!   column heights stay within one item of each other, which is accepted).
//! - **packed**: caption-aware mosaic; heights include measured caption
//!   blocks and every 4th sufficiently wide item becomes a two-column
//!   feature tile.
//!
//! The engine is pure geometry: it receives already-filtered items in stable
//! order and returns positions plus the container height. Re-invocation is
//! the host's job (image measured, debounced resize, visible set changed).

mod masonry;
mod packed;

use crate::model::{GallerySettings, Item, ItemId, LayoutKind};
use tracing::debug;

pub use masonry::place_masonry;
pub use packed::{FEATURE_TILE_INTERVAL, WIDE_ASPECT_THRESHOLD, place_packed};

/// Positioned layout modes (subset of [`LayoutKind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Shortest-column-first, natural aspect heights.
    Masonry,
    /// Caption-aware mosaic with feature tiles.
    Packed,
}

/// Geometry inputs for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Current container width in px.
    pub container_width: f32,
    /// Gap between items in px.
    pub gap: f32,
    /// Which positioned algorithm to run.
    pub mode: LayoutMode,
    /// Per-breakpoint column counts (masonry only).
    pub columns: crate::model::ResponsiveColumns,
    /// Minimum tile width (packed only; derives column count).
    pub min_tile: f32,
}

impl LayoutParams {
    /// Build params from gallery settings at the given container width.
    ///
    /// Returns `None` for CSS-driven kinds (grid/justified): the engine does
    /// not position those.
    pub fn from_settings(settings: &GallerySettings, container_width: f32) -> Option<Self> {
        let mode = match settings.layout {
            LayoutKind::Masonry => LayoutMode::Masonry,
            LayoutKind::Packed => LayoutMode::Packed,
            LayoutKind::Grid | LayoutKind::Justified => return None,
        };
        Some(Self {
            container_width,
            gap: settings.gap,
            mode,
            columns: settings.columns,
            min_tile: settings.min_tile,
        })
    }

    /// Effective column count for this pass.
    ///
    /// Masonry reads the responsive tier table; packed derives from the
    /// minimum tile width, clamped to at least 2 columns.
    pub fn column_count(&self) -> usize {
        match self.mode {
            LayoutMode::Masonry => self.columns.for_width(self.container_width).max(1) as usize,
            LayoutMode::Packed => {
                let per_tile = self.min_tile + self.gap;
                let derived = if per_tile > 0.0 {
                    (self.container_width / per_tile).floor() as usize
                } else {
                    2
                };
                derived.max(2)
            }
        }
    }

    /// Width of a single column for `columns` columns.
    pub fn column_width(&self, columns: usize) -> f32 {
        let columns = columns.max(1) as f32;
        ((self.container_width - self.gap * (columns - 1.0)) / columns).max(0.0)
    }
}

/// Position and occupied box of one laid-out item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Which item this placement positions.
    pub id: ItemId,
    /// Left edge in px, relative to the container.
    pub x: f32,
    /// Top edge in px, relative to the container.
    pub y: f32,
    /// Occupied width in px (spans include inner gaps).
    pub width: f32,
    /// Occupied height in px.
    pub height: f32,
    /// First column index occupied.
    pub column: usize,
    /// Number of columns occupied (1, or 2 for feature tiles).
    pub span: usize,
}

/// Result of one layout pass over the visible set.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// One placement per input item, in input order.
    pub placements: Vec<Placement>,
    /// Overall container height: the tallest column's running height.
    pub container_height: f32,
    /// Column count used for this pass.
    pub columns: usize,
    /// Single-column width used for this pass.
    pub column_width: f32,
}

impl LayoutResult {
    /// An empty result (no visible items).
    pub fn empty(columns: usize, column_width: f32) -> Self {
        Self {
            placements: Vec::new(),
            container_height: 0.0,
            columns,
            column_width,
        }
    }

    /// Look up a placement by item id.
    pub fn placement_of(&self, id: &ItemId) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.id == id)
    }
}

/// Run one layout pass over `items` (the visible set, in stable order).
pub fn layout(items: &[&Item], params: &LayoutParams) -> LayoutResult {
    let columns = params.column_count();
    let column_width = params.column_width(columns);

    if items.is_empty() {
        return LayoutResult::empty(columns, column_width);
    }

    let (placements, heights) = match params.mode {
        LayoutMode::Masonry => place_masonry(items, columns, column_width, params.gap),
        LayoutMode::Packed => place_packed(items, columns, column_width, params.gap),
    };

    let container_height = heights.iter().copied().fold(0.0_f32, f32::max);
    debug!(
        items = items.len(),
        columns,
        container_height,
        mode = ?params.mode,
        "layout pass complete"
    );

    LayoutResult {
        placements,
        container_height,
        columns,
        column_width,
    }
}

/// X coordinate of a column's left edge.
pub(crate) fn column_x(column: usize, column_width: f32, gap: f32) -> f32 {
    column as f32 * (column_width + gap)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
