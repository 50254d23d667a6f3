//! Filter definitions and the flattened parent/descendant hierarchy.
//!
//! The server pre-flattens the hierarchy once at render time into a map from
//! slug to *all* transitive descendant slugs, so matching never recurses.
//! Parsing that JSON is lenient by design: a malformed payload degrades to an
//! empty hierarchy (flat matching) with a logged warning rather than hiding
//! the whole gallery behind a crash.

use crate::model::FilterSlug;
use crate::model::error::HierarchyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Boolean combination mode for multi-select filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    /// Item must intersect the expanded set of *every* active filter.
    And,
    /// Item must intersect the union of all expanded active filters.
    #[default]
    Or,
}

/// A filter as declared by the host (display metadata plus hierarchy link).
///
/// Matching itself only needs slugs; the definition carries what a filter
/// bar needs to render buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// The slug items reference in their tag sets.
    pub slug: FilterSlug,
    /// Human-readable label.
    pub name: String,
    /// Direct parent slug, if this filter is nested.
    #[serde(default)]
    pub parent: Option<FilterSlug>,
    /// Optional accent color for the filter button (CSS color string).
    #[serde(default)]
    pub color: Option<String>,
}

/// Flattened filter hierarchy: slug -> all transitive descendant slugs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterHierarchy {
    descendants: BTreeMap<FilterSlug, Vec<FilterSlug>>,
}

impl FilterHierarchy {
    /// Build from an already-flattened map.
    ///
    /// Rejects self-referential entries: a slug listed among its own
    /// descendants would make expansion ill-defined.
    pub fn new(
        descendants: BTreeMap<FilterSlug, Vec<FilterSlug>>,
    ) -> Result<Self, HierarchyError> {
        for (slug, children) in &descendants {
            if children.contains(slug) {
                return Err(HierarchyError::Cyclic {
                    slug: slug.as_str().to_string(),
                });
            }
        }
        Ok(Self { descendants })
    }

    /// Parse the server-rendered hierarchy JSON (`{"slug": ["child", ...]}`).
    ///
    /// Malformed JSON or a cyclic map degrades to the empty hierarchy with a
    /// warning: filters then match flat, which hides nothing that a correct
    /// hierarchy would have shown.
    pub fn from_json(raw: &str) -> Self {
        let parsed: Result<BTreeMap<String, Vec<String>>, _> = serde_json::from_str(raw);
        let map = match parsed {
            Ok(map) => map,
            Err(err) => {
                warn!(error = %err, "malformed filter hierarchy JSON, degrading to flat matching");
                return Self::default();
            }
        };

        let mut descendants = BTreeMap::new();
        for (slug, children) in map {
            let Ok(slug) = FilterSlug::new(slug) else {
                warn!("empty slug key in hierarchy JSON, skipping entry");
                continue;
            };
            let children = children
                .into_iter()
                .filter_map(|c| FilterSlug::new(c).ok())
                .collect();
            descendants.insert(slug, children);
        }

        match Self::new(descendants) {
            Ok(hierarchy) => hierarchy,
            Err(err) => {
                warn!(error = %err, "cyclic filter hierarchy, degrading to flat matching");
                Self::default()
            }
        }
    }

    /// All transitive descendants of `slug` (empty for leaves and unknown slugs).
    pub fn descendants(&self, slug: &FilterSlug) -> &[FilterSlug] {
        self.descendants
            .get(slug)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The expanded set of a filter: itself plus all descendants.
    pub fn expand(&self, slug: &FilterSlug) -> BTreeSet<FilterSlug> {
        let mut set: BTreeSet<FilterSlug> = self.descendants(slug).iter().cloned().collect();
        set.insert(slug.clone());
        set
    }

    /// True when no parent/child relationships are known.
    pub fn is_empty(&self) -> bool {
        self.descendants.is_empty()
    }
}
