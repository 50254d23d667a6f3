//! Acceptance tests for the four end-to-end scenarios.
//!
//! Each test drives the public reducer API exactly as a host would:
//! events in, effects out, state inspected through accessors.

use std::collections::BTreeSet;
use tessella::anim::TransitionPhase;
use tessella::model::{
    FilterHierarchy, FilterLogic, FilterSlug, GalleryId, GallerySettings, Item, ItemId,
    LayoutKind, PaginationMode,
};
use tessella::pagination::FetchResponse;
use tessella::state::{Effect, GalleryEvent, GalleryRegistry};

fn gid() -> GalleryId {
    GalleryId::new("gallery-1").unwrap()
}

fn slug(s: &str) -> FilterSlug {
    FilterSlug::new(s).unwrap()
}

fn item(id: &str, tags: &[&str]) -> Item {
    let mut it = Item::new(
        ItemId::new(id).unwrap(),
        tags.iter().map(|t| slug(t)).collect::<Vec<_>>(),
    );
    it.aspect = Some(1.0);
    it
}

fn registry_with(settings: GallerySettings, items: Vec<Item>) -> GalleryRegistry {
    let mut registry = GalleryRegistry::new();
    registry.register(gid(), settings, FilterHierarchy::default(), 1280.0, items);
    registry
}

// ===== Scenario A: load-more to exhaustion =====

#[test]
fn scenario_a_load_more_sequence() {
    // GIVEN: 10 items total, 4 per page, 4 rendered server-side.
    let settings = GallerySettings {
        layout: LayoutKind::Masonry,
        pagination: PaginationMode::LoadMore,
        items_per_page: 4,
        total_items: 10,
        ..GallerySettings::default()
    };
    let initial: Vec<Item> = (0..4).map(|n| item(&format!("i{n}"), &[])).collect();
    let mut registry = registry_with(settings, initial);

    let state = registry.get(&gid()).unwrap();
    assert_eq!(state.visible_ids().len(), 4);
    assert_eq!(state.remaining(), 6);

    // WHEN: the load-more button is clicked.
    let effects = registry.dispatch(&gid(), GalleryEvent::LoadMoreRequested);
    let request = match &effects[0] {
        Effect::Fetch(req) => req.clone(),
        other => panic!("expected fetch, got {other:?}"),
    };
    assert_eq!(request.page, 2);
    assert_eq!(request.filters, "*");
    assert_eq!(request.exclude.len(), 4);

    // AND: the server answers with the next batch.
    let response = FetchResponse {
        html: String::new(),
        has_more: true,
        remaining: 2,
        total: 10,
        loaded: 8,
    };
    registry.dispatch(
        &gid(),
        GalleryEvent::ItemsLoaded {
            response,
            items: (4..8).map(|n| item(&format!("i{n}"), &[])).collect(),
        },
    );

    // THEN: 8 visible, 2 remaining.
    let state = registry.get(&gid()).unwrap();
    assert_eq!(state.visible_ids().len(), 8);
    assert_eq!(state.remaining(), 2);

    // WHEN: clicked again and the final batch arrives.
    registry.dispatch(&gid(), GalleryEvent::LoadMoreRequested);
    let response = FetchResponse {
        html: String::new(),
        has_more: false,
        remaining: 0,
        total: 10,
        loaded: 10,
    };
    registry.dispatch(
        &gid(),
        GalleryEvent::ItemsLoaded {
            response,
            items: (8..10).map(|n| item(&format!("i{n}"), &[])).collect(),
        },
    );

    // THEN: all 10 visible, exhausted, and the trigger is a no-op.
    let state = registry.get(&gid()).unwrap();
    assert_eq!(state.visible_ids().len(), 10);
    assert_eq!(state.remaining(), 0);
    let effects = registry.dispatch(&gid(), GalleryEvent::LoadMoreRequested);
    assert!(effects.is_empty());
}

// ===== Scenario B: AND logic =====

#[test]
fn scenario_b_and_logic_intersection() {
    // GIVEN: photo tags items 1-4, design tags items 4-5, AND logic,
    // multi-select on.
    let settings = GallerySettings {
        layout: LayoutKind::Masonry,
        logic: FilterLogic::And,
        multi_select: true,
        ..GallerySettings::default()
    };
    let items: Vec<Item> = (1..=5)
        .map(|n| {
            let mut tags: Vec<&str> = Vec::new();
            if n <= 4 {
                tags.push("photo");
            }
            if n >= 4 {
                tags.push("design");
            }
            item(&format!("item-{n}"), &tags)
        })
        .collect();
    let mut registry = registry_with(settings, items);

    // WHEN: both filters are activated.
    registry.dispatch(&gid(), GalleryEvent::FilterToggled(slug("photo")));
    let effects = registry.dispatch(&gid(), GalleryEvent::FilterToggled(slug("design")));

    // THEN: only item 4 is visible and the notification says so.
    let state = registry.get(&gid()).unwrap();
    assert_eq!(state.visible_ids(), vec![ItemId::new("item-4").unwrap()]);

    let notice = effects
        .iter()
        .find_map(|e| match e {
            Effect::Notify(n) => Some(n),
            _ => None,
        })
        .expect("transition should notify");
    assert_eq!(notice.visible_count, 1);
    assert_eq!(notice.logic, FilterLogic::And);
    let expected: BTreeSet<FilterSlug> = [slug("photo"), slug("design")].into_iter().collect();
    assert_eq!(notice.active, expected);
}

// ===== Scenario C: masonry even distribution =====

#[test]
fn scenario_c_even_masonry_columns() {
    // GIVEN: 3 columns, 6 square items.
    let settings = GallerySettings {
        layout: LayoutKind::Masonry,
        columns: tessella::model::ResponsiveColumns {
            wide: 3,
            desktop: 3,
            tablet: 3,
            phone: 3,
        },
        gap: 10.0,
        ..GallerySettings::default()
    };
    let items: Vec<Item> = (0..6).map(|n| item(&format!("sq{n}"), &[])).collect();
    let mut registry = registry_with(settings, items);

    // WHEN: layout is forced (as after external insertion).
    let result = registry.relayout(&gid()).expect("masonry is positioned");

    // THEN: each column holds two items and the container is 2h + 2gap.
    let h = result.column_width;
    assert!((result.container_height - (2.0 * h + 20.0)).abs() < 1e-3);
    for col in 0..3 {
        let count = result.placements.iter().filter(|p| p.column == col).count();
        assert_eq!(count, 2, "column {col} should hold 2 items");
    }
}

// ===== Scenario D: numbered pagination =====

#[test]
fn scenario_d_numbered_pages() {
    // GIVEN: 25 loaded items, numbered mode, 10 per page.
    let settings = GallerySettings {
        layout: LayoutKind::Grid,
        pagination: PaginationMode::Numbered,
        items_per_page: 10,
        total_items: 25,
        ..GallerySettings::default()
    };
    let items: Vec<Item> = (1..=25).map(|n| item(&format!("item-{n:02}"), &[])).collect();
    let mut registry = registry_with(settings, items);

    let state = registry.get(&gid()).unwrap();
    assert_eq!(
        tessella::pagination::total_pages(state.filter_visible().len(), 10),
        3
    );
    assert_eq!(state.visible_ids().len(), 10);

    // WHEN: page 2 is selected.
    let effects = registry.dispatch(&gid(), GalleryEvent::PageSelected(2));

    // THEN: items 11-20 are visible, nothing was fetched.
    assert!(!effects.iter().any(|e| matches!(e, Effect::Fetch(_))));
    let state = registry.get(&gid()).unwrap();
    let visible = state.visible_ids();
    assert_eq!(visible.len(), 10);
    assert_eq!(visible.first().unwrap().as_str(), "item-11");
    assert_eq!(visible.last().unwrap().as_str(), "item-20");
}

// ===== Transition ordering =====

#[test]
fn filter_change_hides_before_relayout_before_show() {
    let settings = GallerySettings {
        layout: LayoutKind::Masonry,
        ..GallerySettings::default()
    };
    let mut registry = registry_with(
        settings,
        vec![item("a", &["x"]), item("b", &["y"]), item("c", &["y"])],
    );
    let effects = registry.dispatch(&gid(), GalleryEvent::FilterToggled(slug("y")));
    let plan = effects
        .iter()
        .find_map(|e| match e {
            Effect::Transition(plan) => Some(plan),
            _ => None,
        })
        .expect("positioned layout plans a reflow transition");

    let order: Vec<&str> = plan
        .phases
        .iter()
        .map(|p| match p {
            TransitionPhase::Hide { .. } => "hide",
            TransitionPhase::Relayout => "relayout",
            TransitionPhase::Show { .. } => "show",
            TransitionPhase::Invert { .. } => "invert",
            TransitionPhase::Play { .. } => "play",
        })
        .collect();
    assert_eq!(order, vec!["hide", "relayout"]);
}

#[test]
fn empty_gallery_is_a_valid_state() {
    // Zero items, zero filters: every operation must produce valid output.
    let settings = GallerySettings {
        layout: LayoutKind::Masonry,
        ..GallerySettings::default()
    };
    let mut registry = registry_with(settings, Vec::new());
    let effects = registry.dispatch(&gid(), GalleryEvent::FilterToggled(slug("anything")));
    assert!(!effects.is_empty());
    let result = registry.relayout(&gid()).unwrap();
    assert!(result.placements.is_empty());
    assert_eq!(result.container_height, 0.0);
}
