//! Gallery item domain record.
//!
//! An [`Item`] is created when its markup is first rendered or fetched and is
//! never destroyed within a page session: filter changes only hide it.
//! Visibility is *derived* state (recomputed from filters + search), while
//! measurement state (aspect ratio, caption height) arrives asynchronously
//! from the host as images load.

use crate::model::{FilterSlug, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Aspect ratio used for items whose image has not been measured yet (or
/// failed to load within the host's bounded wait). Square keeps the layout
/// stable until real dimensions arrive.
pub const FALLBACK_ASPECT: f32 = 1.0;

/// Caption height assumed when a captioned item measures zero because its
/// DOM node has not been painted yet.
pub const FALLBACK_CAPTION_HEIGHT: f32 = 50.0;

/// A single gallery item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, from the rendered markup.
    pub id: ItemId,
    /// Filter tags this item carries (`filter-<slug>` classes in markup).
    pub tags: BTreeSet<FilterSlug>,
    /// Title text, searched case-insensitively.
    #[serde(default)]
    pub title: String,
    /// Image alt text, searched case-insensitively.
    #[serde(default)]
    pub alt: String,
    /// Intrinsic width/height ratio. `None` until the image is measured.
    #[serde(default)]
    pub aspect: Option<f32>,
    /// Whether the item has a caption block (packed mode reserves height for it).
    #[serde(default)]
    pub has_caption: bool,
    /// Measured caption height in px. `None` or zero falls back to
    /// [`FALLBACK_CAPTION_HEIGHT`] when `has_caption` is set.
    #[serde(default)]
    pub caption_height: Option<f32>,
}

impl Item {
    /// Create an item with only identity and tags; measurements arrive later.
    pub fn new(id: ItemId, tags: impl IntoIterator<Item = FilterSlug>) -> Self {
        Self {
            id,
            tags: tags.into_iter().collect(),
            title: String::new(),
            alt: String::new(),
            aspect: None,
            has_caption: false,
            caption_height: None,
        }
    }

    /// The aspect ratio to lay out with: measured, or the square fallback.
    pub fn effective_aspect(&self) -> f32 {
        match self.aspect {
            Some(a) if a.is_finite() && a > 0.0 => a,
            _ => FALLBACK_ASPECT,
        }
    }

    /// Caption height to reserve in packed mode.
    ///
    /// Zero when the item has no caption; the 50px fallback when a caption
    /// exists but measurement yielded nothing (not-yet-rendered DOM).
    pub fn effective_caption_height(&self) -> f32 {
        if !self.has_caption {
            return 0.0;
        }
        match self.caption_height {
            Some(h) if h > 0.0 => h,
            _ => FALLBACK_CAPTION_HEIGHT,
        }
    }

    /// Whether the item carries the given tag.
    pub fn has_tag(&self, slug: &FilterSlug) -> bool {
        self.tags.contains(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> FilterSlug {
        FilterSlug::new(s).unwrap()
    }

    #[test]
    fn unmeasured_item_uses_square_fallback() {
        let item = Item::new(ItemId::new("a").unwrap(), [slug("rooms")]);
        assert_eq!(item.effective_aspect(), FALLBACK_ASPECT);
    }

    #[test]
    fn degenerate_aspect_uses_fallback() {
        let mut item = Item::new(ItemId::new("a").unwrap(), []);
        item.aspect = Some(0.0);
        assert_eq!(item.effective_aspect(), FALLBACK_ASPECT);
        item.aspect = Some(f32::NAN);
        assert_eq!(item.effective_aspect(), FALLBACK_ASPECT);
    }

    #[test]
    fn caption_height_zero_without_caption() {
        let mut item = Item::new(ItemId::new("a").unwrap(), []);
        item.caption_height = Some(80.0);
        assert_eq!(item.effective_caption_height(), 0.0);
    }

    #[test]
    fn captioned_but_unmeasured_uses_fallback() {
        let mut item = Item::new(ItemId::new("a").unwrap(), []);
        item.has_caption = true;
        assert_eq!(item.effective_caption_height(), FALLBACK_CAPTION_HEIGHT);
        item.caption_height = Some(0.0);
        assert_eq!(item.effective_caption_height(), FALLBACK_CAPTION_HEIGHT);
        item.caption_height = Some(32.0);
        assert_eq!(item.effective_caption_height(), 32.0);
    }
}
