//! CSS class and inline-style projection.
//!
//! Classes are the wire contract with the rendered markup, but they are a
//! *projection* of canonical state - the engine never reads them back. The
//! host applies [`ItemPatch`]es verbatim; idempotency comes from the class
//! set fully describing an item (re-applying a patch is harmless).

use crate::anim::{ENTER_SCALE, MOVE_DURATION_MS, MOVE_EASING};
use crate::layout::Placement;
use crate::model::ItemId;

/// Class on items hidden by the active filter/search.
pub const CLASS_HIDDEN: &str = "pfg-item--hidden";
/// Class during the fade/scale-out phase, before removal from flow.
pub const CLASS_HIDING: &str = "pfg-item--hiding";
/// Class on items in the visible set.
pub const CLASS_VISIBLE: &str = "pfg-item--visible";
/// Class on items that have received an absolute position.
pub const CLASS_POSITIONED: &str = "pfg-item--positioned";
/// Class on items hidden only by the numbered-pagination slice.
pub const CLASS_PAGINATED_HIDDEN: &str = "pfg-item--paginated-hidden";

/// Visibility projection for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVisibility {
    /// In the visible set.
    Visible,
    /// Mid fade-out (leaving, within the hide delay).
    Hiding,
    /// Filtered or searched out.
    Hidden,
    /// Visible by filter but outside the current numbered page.
    PaginatedHidden,
}

/// One item's projected classes and inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPatch {
    /// Which item the patch targets.
    pub id: ItemId,
    /// Complete class set to apply (replaces previous engine classes).
    pub classes: Vec<&'static str>,
    /// Inline style string, when the engine positions this item.
    pub style: Option<String>,
}

/// Project an item's visibility (and optional placement) into a patch.
pub fn project_item(id: &ItemId, visibility: ItemVisibility, placement: Option<&Placement>) -> ItemPatch {
    let mut classes = Vec::new();
    match visibility {
        ItemVisibility::Visible => classes.push(CLASS_VISIBLE),
        ItemVisibility::Hiding => {
            classes.push(CLASS_VISIBLE);
            classes.push(CLASS_HIDING);
        }
        ItemVisibility::Hidden => classes.push(CLASS_HIDDEN),
        ItemVisibility::PaginatedHidden => classes.push(CLASS_PAGINATED_HIDDEN),
    }
    let style = placement.map(|p| {
        classes.push(CLASS_POSITIONED);
        position_style(p)
    });
    ItemPatch {
        id: id.clone(),
        classes,
        style,
    }
}

/// Inline style for an absolute placement.
pub fn position_style(p: &Placement) -> String {
    format!(
        "transform: translate({:.1}px, {:.1}px); width: {:.1}px; height: {:.1}px;",
        p.x, p.y, p.width, p.height
    )
}

/// Inline style for an entering item before its fade-in starts.
pub fn enter_style() -> String {
    format!("opacity: 0; transform: scale({ENTER_SCALE});")
}

/// Transition property for a FLIP playback phase.
pub fn flip_transition_style() -> String {
    let secs = MOVE_DURATION_MS as f32 / 1000.0;
    format!("transition: transform {secs:.2}s {MOVE_EASING};")
}

/// Container height style after a layout pass.
pub fn container_style(height: f32) -> String {
    format!("height: {height:.1}px;")
}
