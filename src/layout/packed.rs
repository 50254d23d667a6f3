//! Caption-aware packed/mosaic placement with feature tiles.

use super::{Placement, column_x};
use crate::model::Item;

/// Aspect ratio above which an item qualifies as a feature-tile candidate.
pub const WIDE_ASPECT_THRESHOLD: f32 = 1.5;

/// Every Nth wide item (counting wide items only, starting at the first)
/// becomes a two-column feature tile.
pub const FEATURE_TILE_INTERVAL: usize = 4;

/// Place items round-robin with caption-aware heights.
///
/// Height = image height at the tile width (aspect-scaled) plus the
/// reserved caption height. Column assignment is round-robin by visible
/// index rather than shortest-first, clamped so spanning tiles never
/// overflow the last column. A spanning tile rests on the tallest of its
/// columns and advances all of them together, which is what keeps the
/// no-overlap invariant for multi-column items.
///
/// Returns the placements (input order) and the final running column heights.
pub fn place_packed(
    items: &[&Item],
    columns: usize,
    column_width: f32,
    gap: f32,
) -> (Vec<Placement>, Vec<f32>) {
    let columns = columns.max(1);
    let mut heights = vec![0.0_f32; columns];
    let mut placements = Vec::with_capacity(items.len());
    let mut wide_seen = 0usize;

    for (index, item) in items.iter().enumerate() {
        let aspect = item.effective_aspect();
        let span = if aspect > WIDE_ASPECT_THRESHOLD && columns >= 2 {
            let feature = wide_seen % FEATURE_TILE_INTERVAL == 0;
            wide_seen += 1;
            if feature { 2 } else { 1 }
        } else {
            1
        };

        let column = (index % columns).min(columns - span);
        let width = column_width * span as f32 + gap * (span as f32 - 1.0);
        let height = width / aspect + item.effective_caption_height();

        let y = heights[column..column + span]
            .iter()
            .copied()
            .fold(0.0_f32, f32::max);
        placements.push(Placement {
            id: item.id.clone(),
            x: column_x(column, column_width, gap),
            y,
            width,
            height,
            column,
            span,
        });
        for h in &mut heights[column..column + span] {
            *h = y + height + gap;
        }
    }

    (placements, heights)
}
