//! Shortest-column-first masonry placement.

use super::{Placement, column_x};
use crate::model::Item;

/// Place items into columns, each going to the currently shortest column.
///
/// Item height is the image's natural height scaled to the column width by
/// its aspect ratio. Ties pick the leftmost column, which is what makes
/// equal-height inputs distribute evenly left-to-right.
///
/// Returns the placements (input order) and the final running column
/// heights, each including the trailing gap of its last item.
pub fn place_masonry(
    items: &[&Item],
    columns: usize,
    column_width: f32,
    gap: f32,
) -> (Vec<Placement>, Vec<f32>) {
    let columns = columns.max(1);
    let mut heights = vec![0.0_f32; columns];
    let mut placements = Vec::with_capacity(items.len());

    for item in items {
        let height = column_width / item.effective_aspect();
        let column = shortest_column(&heights);
        let y = heights[column];
        placements.push(Placement {
            id: item.id.clone(),
            x: column_x(column, column_width, gap),
            y,
            width: column_width,
            height,
            column,
            span: 1,
        });
        heights[column] = y + height + gap;
    }

    (placements, heights)
}

/// Index of the shortest column; leftmost wins ties.
fn shortest_column(heights: &[f32]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = i;
        }
    }
    best
}
