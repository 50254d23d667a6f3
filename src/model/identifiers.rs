//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an identifier is constructed from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} must be non-empty")]
pub struct InvalidIdentifier {
    /// Which identifier kind rejected the input ("gallery id", "item id", "filter slug").
    pub kind: &'static str,
}

/// Unique identifier for a gallery container on the page.
///
/// Galleries are independent: each owns its own filter, layout, and
/// pagination state in the [`crate::state::GalleryRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(String);

impl GalleryId {
    /// Smart constructor: validates a non-empty gallery id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidIdentifier { kind: "gallery id" })
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier for a gallery item.
///
/// Item ids come from the server-rendered markup and are the dedup key for
/// pagination fetches: the client reports which ids it already holds so the
/// server never re-sends them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates a non-empty item id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidIdentifier { kind: "item id" })
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A filter tag category (e.g. `"rooms"`, `"spa"`).
///
/// Slugs double as CSS class suffixes (`filter-<slug>`) in the rendered
/// markup, so they are treated as opaque strings: an unknown slug still
/// participates in matching as a literal, never dropping items silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSlug(String);

impl FilterSlug {
    /// Smart constructor: validates a non-empty slug.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidIdentifier {
                kind: "filter slug",
            })
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
