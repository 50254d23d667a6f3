//! FLIP (First-Last-Invert-Play) position diffing.
//!
//! For CSS-driven layouts the engine never computes positions; instead the
//! host records each surviving item's bounding box before ("first") and
//! after ("last") the class change, and this module turns the two snapshots
//! into inverse transforms that replay the move as continuous motion.

use crate::model::ItemId;
use std::collections::BTreeMap;

/// A measured bounding box, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge in px.
    pub x: f32,
    /// Top edge in px.
    pub y: f32,
    /// Width in px.
    pub width: f32,
    /// Height in px.
    pub height: f32,
}

/// An inverse transform for one surviving item that moved.
///
/// Applied untransitioned (`translate(dx, dy)`), then played back to the
/// identity transform over the move duration.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDelta {
    /// The item to transform.
    pub id: ItemId,
    /// Horizontal inverse offset: `first.x - last.x`.
    pub dx: f32,
    /// Vertical inverse offset: `first.y - last.y`.
    pub dy: f32,
}

/// Compute inverse deltas for items present in both snapshots that moved.
///
/// Items only in `first` left visibility; items only in `last` entered;
/// neither gets a delta (they fade, not slide). Sub-pixel jitter below
/// `0.5px` is ignored to avoid pointless transforms.
pub fn move_deltas(
    first: &BTreeMap<ItemId, Rect>,
    last: &BTreeMap<ItemId, Rect>,
) -> Vec<MoveDelta> {
    let mut moves = Vec::new();
    for (id, first_rect) in first {
        let Some(last_rect) = last.get(id) else {
            continue;
        };
        let dx = first_rect.x - last_rect.x;
        let dy = first_rect.y - last_rect.y;
        if dx.abs() >= 0.5 || dy.abs() >= 0.5 {
            moves.push(MoveDelta {
                id: id.clone(),
                dx,
                dy,
            });
        }
    }
    moves
}
