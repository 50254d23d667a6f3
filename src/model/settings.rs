//! Gallery settings parsed from the container's data attributes.
//!
//! The host serializes settings to JSON at render time; the engine parses
//! them once per gallery at initialization. Unknown fields are ignored and
//! missing fields take defaults, so older markup keeps working.

use crate::model::FilterSlug;
use crate::model::error::SettingsError;
use serde::{Deserialize, Serialize};

/// How items are visually arranged.
///
/// Only `Masonry` and `Packed` are positioned by the engine; `Grid` and
/// `Justified` are CSS-driven and only affect which transition strategy the
/// animation planner picks (FLIP instead of reflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Native aspect ratio, shortest-column-first packing.
    Masonry,
    /// Caption-aware mosaic with occasional two-column feature tiles.
    Packed,
    /// Uniform CSS grid (engine does not position).
    #[default]
    Grid,
    /// Row-based justified layout (engine does not position).
    Justified,
}

impl LayoutKind {
    /// Whether the engine computes absolute positions for this kind.
    pub fn is_positioned(self) -> bool {
        matches!(self, LayoutKind::Masonry | LayoutKind::Packed)
    }
}

/// Pagination UX mode. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Everything rendered up front; no paging.
    #[default]
    None,
    /// Button-triggered server fetch of the next batch.
    LoadMore,
    /// Viewport-intersection-triggered server fetch.
    Infinite,
    /// Client-side repagination of already-loaded items; no fetch.
    Numbered,
}

impl PaginationMode {
    /// Whether this mode fetches batches from the server.
    pub fn fetches(self) -> bool {
        matches!(self, PaginationMode::LoadMore | PaginationMode::Infinite)
    }
}

/// Per-breakpoint column counts for masonry/grid layouts.
///
/// Tiers follow the rendered stylesheet: >=1200px, >=992px, >=768px, below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveColumns {
    /// Columns at container width >= 1200px.
    #[serde(default = "default_wide")]
    pub wide: u32,
    /// Columns at >= 992px.
    #[serde(default = "default_desktop")]
    pub desktop: u32,
    /// Columns at >= 768px.
    #[serde(default = "default_tablet")]
    pub tablet: u32,
    /// Columns below 768px.
    #[serde(default = "default_phone")]
    pub phone: u32,
}

fn default_wide() -> u32 {
    4
}
fn default_desktop() -> u32 {
    3
}
fn default_tablet() -> u32 {
    2
}
fn default_phone() -> u32 {
    1
}

impl Default for ResponsiveColumns {
    fn default() -> Self {
        Self {
            wide: default_wide(),
            desktop: default_desktop(),
            tablet: default_tablet(),
            phone: default_phone(),
        }
    }
}

impl ResponsiveColumns {
    /// Column count for a given container width, by breakpoint tier.
    pub fn for_width(&self, width: f32) -> u32 {
        if width >= 1200.0 {
            self.wide
        } else if width >= 992.0 {
            self.desktop
        } else if width >= 768.0 {
            self.tablet
        } else {
            self.phone
        }
    }
}

/// All per-gallery configuration the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Layout algorithm / transition strategy selector.
    pub layout: LayoutKind,
    /// Per-breakpoint column counts (masonry; packed derives its own).
    pub columns: ResponsiveColumns,
    /// Gap between items in px.
    pub gap: f32,
    /// Minimum tile width in px; packed mode derives column count from it.
    pub min_tile: f32,
    /// Whether several filters may be active at once.
    pub multi_select: bool,
    /// AND/OR combination for multi-select.
    pub logic: crate::model::FilterLogic,
    /// Filter activated on load (before any URL deep link).
    pub default_filter: Option<FilterSlug>,
    /// Whether the active filter is mirrored to / read from the URL.
    pub deep_link: bool,
    /// Query parameter name used for deep linking.
    pub url_param: String,
    /// Pagination mode.
    pub pagination: PaginationMode,
    /// Page size for all pagination modes.
    pub items_per_page: u32,
    /// Server-authoritative total item count for the unfiltered gallery.
    pub total_items: u64,
    /// Security token forwarded on batch fetches.
    pub nonce: Option<String>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            columns: ResponsiveColumns::default(),
            gap: 10.0,
            min_tile: 250.0,
            multi_select: false,
            logic: crate::model::FilterLogic::default(),
            default_filter: None,
            deep_link: false,
            url_param: "filter".to_string(),
            pagination: PaginationMode::default(),
            items_per_page: 12,
            total_items: 0,
            nonce: None,
        }
    }
}

impl GallerySettings {
    /// Parse settings from the container's JSON data attribute.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|err| SettingsError::MalformedJson {
                message: err.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Range-check numeric settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.items_per_page == 0 {
            return Err(SettingsError::OutOfRange {
                field: "items_per_page",
                value: 0,
            });
        }
        for (field, value) in [
            ("columns.wide", self.columns.wide),
            ("columns.desktop", self.columns.desktop),
            ("columns.tablet", self.columns.tablet),
            ("columns.phone", self.columns.phone),
        ] {
            if value == 0 {
                return Err(SettingsError::OutOfRange {
                    field,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }
}
