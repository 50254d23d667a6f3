//! Multi-filter matching with AND/OR logic and hierarchy expansion.
//!
//! All functions here are pure: visibility is a function of (item, active
//! filters, logic, hierarchy, search term) and nothing else, so the matcher
//! is testable without any DOM or host runtime.
//!
//! # AND semantics
//!
//! AND is checked *per filter group*: the item must carry at least one tag
//! from each active filter's own expanded set (the filter plus its
//! descendants). This is not the global intersection of all expanded sets.
//! The distinction matters once hierarchies are active and is preserved
//! deliberately; see DESIGN.md.

use crate::model::{FilterHierarchy, FilterLogic, FilterSlug, Item};
use std::collections::BTreeSet;

/// Decide whether an item satisfies the active filter set.
///
/// An empty `active` set is the "All" state and matches everything.
/// Unknown slugs (absent from the hierarchy) still participate as literal
/// tag matches, so incomplete filter metadata never hides the whole gallery.
pub fn matches(
    item: &Item,
    active: &BTreeSet<FilterSlug>,
    logic: FilterLogic,
    hierarchy: &FilterHierarchy,
) -> bool {
    if active.is_empty() {
        return true;
    }

    match logic {
        FilterLogic::Or => active
            .iter()
            .any(|slug| intersects_expanded(item, slug, hierarchy)),
        FilterLogic::And => active
            .iter()
            .all(|slug| intersects_expanded(item, slug, hierarchy)),
    }
}

/// True when the item's tags intersect `slug`'s expanded set (itself plus
/// all declared descendants).
fn intersects_expanded(item: &Item, slug: &FilterSlug, hierarchy: &FilterHierarchy) -> bool {
    if item.has_tag(slug) {
        return true;
    }
    hierarchy
        .descendants(slug)
        .iter()
        .any(|child| item.has_tag(child))
}

/// Case-insensitive substring search over title and alt text.
///
/// An empty (or whitespace-only) term matches everything; search is an
/// independent predicate applied on top of filter matching.
pub fn matches_search(item: &Item, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.title.to_lowercase().contains(&needle) || item.alt.to_lowercase().contains(&needle)
}

/// Combined visibility predicate: filter match AND search match.
pub fn is_visible(
    item: &Item,
    active: &BTreeSet<FilterSlug>,
    logic: FilterLogic,
    hierarchy: &FilterHierarchy,
    search: &str,
) -> bool {
    matches(item, active, logic, hierarchy) && matches_search(item, search)
}

/// Project the visible subset of `items`, preserving input order.
pub fn visible_items<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    active: &BTreeSet<FilterSlug>,
    logic: FilterLogic,
    hierarchy: &FilterHierarchy,
    search: &str,
) -> Vec<&'a Item> {
    items
        .into_iter()
        .filter(|item| is_visible(item, active, logic, hierarchy, search))
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
