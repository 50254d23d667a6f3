//! Filter matching benchmarks.
//!
//! Matching runs over the whole item list on every filter toggle and every
//! search keystroke, so it is the hottest pure function in the engine.
//!
//! Run with: cargo bench --bench matcher_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::BTreeSet;
use tessella::filter::visible_items;
use tessella::model::{FilterHierarchy, FilterLogic, FilterSlug, Item, ItemId};

const TAGS: [&str; 8] = [
    "rooms", "suites", "spa", "dining", "pool", "events", "garden", "lobby",
];

fn slug(s: &str) -> FilterSlug {
    FilterSlug::new(s).expect("valid slug")
}

/// Generate items tagged with two or three of the pool tags each, with
/// titles long enough that search does real substring work.
fn generate_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|n| {
            let tags: Vec<FilterSlug> = (0..2 + n % 2).map(|k| slug(TAGS[(n + k) % 8])).collect();
            let mut item = Item::new(ItemId::new(format!("item-{n:05}")).expect("valid id"), tags);
            item.title = format!("Gallery photograph number {n} taken at the resort");
            item.alt = format!("Alt text for photograph {n}");
            item
        })
        .collect()
}

fn hierarchy() -> FilterHierarchy {
    FilterHierarchy::from_json(r#"{"rooms": ["suites"], "spa": ["pool"]}"#)
}

fn benchmark_matching(c: &mut Criterion) {
    let hierarchy = hierarchy();
    let mut group = c.benchmark_group("matching");

    for count in [100, 1_000, 10_000] {
        let items = generate_items(count);
        let active: BTreeSet<FilterSlug> = [slug("rooms"), slug("spa")].into_iter().collect();

        group.bench_with_input(BenchmarkId::new("or_two_filters", count), &items, |b, items| {
            b.iter(|| {
                black_box(visible_items(
                    black_box(items),
                    &active,
                    FilterLogic::Or,
                    &hierarchy,
                    "",
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("and_two_filters", count), &items, |b, items| {
            b.iter(|| {
                black_box(visible_items(
                    black_box(items),
                    &active,
                    FilterLogic::And,
                    &hierarchy,
                    "",
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("search_term", count), &items, |b, items| {
            let no_filters = BTreeSet::new();
            b.iter(|| {
                black_box(visible_items(
                    black_box(items),
                    &no_filters,
                    FilterLogic::Or,
                    &hierarchy,
                    "number 42",
                ))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_matching
}

criterion_main!(benches);
