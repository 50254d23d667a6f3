//! tessella inspector - drive the gallery engine from a JSON fixture.
//!
//! Loads a gallery description (settings, hierarchy, items), applies the
//! requested filters/search at the given container width, and prints the
//! visible set and computed layout. Useful for eyeballing packing decisions
//! without a browser host.

use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tessella::model::{
    FilterHierarchy, FilterSlug, GalleryId, GallerySettings, Item,
};
use tessella::state::{Effect, GalleryEvent, GalleryRegistry};
use tracing::info;

/// Gallery fixture file: settings plus items plus optional hierarchy.
#[derive(Debug, serde::Deserialize)]
struct GalleryFixture {
    /// Engine settings, same schema as the container data attribute.
    #[serde(default)]
    settings: GallerySettings,
    /// Flattened hierarchy map (slug -> descendant slugs).
    #[serde(default)]
    hierarchy: BTreeMap<String, Vec<String>>,
    /// The gallery's items.
    items: Vec<Item>,
}

/// Inspect filter and layout decisions for a gallery fixture.
#[derive(Parser, Debug)]
#[command(name = "tessella")]
#[command(version)]
#[command(about = "Headless gallery engine inspector")]
struct Args {
    /// Path to the gallery fixture JSON
    fixture: PathBuf,

    /// Activate a filter (repeatable)
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Search term applied on top of filters
    #[arg(short, long)]
    search: Option<String>,

    /// Container width in px
    #[arg(short, long, default_value = "1280")]
    width: f32,

    /// Log file path (defaults to tessella.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("tessella.log"));
    tessella::logging::init(&log_path)?;
    info!(fixture = ?args.fixture, "inspector starting");

    let raw = std::fs::read_to_string(&args.fixture)?;
    let fixture: GalleryFixture = serde_json::from_str(&raw)?;

    let mut descendants = BTreeMap::new();
    for (slug, children) in fixture.hierarchy {
        let slug = FilterSlug::new(slug)?;
        let children = children
            .into_iter()
            .map(FilterSlug::new)
            .collect::<Result<Vec<_>, _>>()?;
        descendants.insert(slug, children);
    }
    let hierarchy = FilterHierarchy::new(descendants)?;

    let id = GalleryId::new("inspector")?;
    let mut registry = GalleryRegistry::new();
    registry.register(id.clone(), fixture.settings, hierarchy, args.width, fixture.items);

    // Replay the requested interaction as events, like a host would.
    for filter in &args.filters {
        let slug = FilterSlug::new(filter.clone())?;
        registry.dispatch(&id, GalleryEvent::FilterToggled(slug));
    }
    if let Some(term) = &args.search {
        registry.dispatch(&id, GalleryEvent::SearchChanged(term.clone()));
    }
    let effects = registry.dispatch(&id, GalleryEvent::Resized {
        container_width: args.width,
    });
    for effect in &effects {
        if let Effect::Transition(plan) = effect {
            info!(phases = plan.phases.len(), "final transition plan");
        }
    }

    let state = registry.get(&id).expect("gallery was just registered");
    let visible = state.visible_ids();
    println!(
        "visible: {} of {} loaded ({} remaining on server)",
        visible.len(),
        state.items().len(),
        state.remaining()
    );

    match state.layout_result() {
        Some(result) => {
            println!(
                "layout: {} columns x {:.1}px, container {:.1}px tall",
                result.columns, result.column_width, result.container_height
            );
            for p in &result.placements {
                println!(
                    "  {:<16} col {}{} at ({:>7.1}, {:>7.1})  {:>6.1} x {:.1}",
                    p.id.as_str(),
                    p.column,
                    if p.span > 1 { "+" } else { " " },
                    p.x,
                    p.y,
                    p.width,
                    p.height
                );
            }
        }
        None => {
            println!("layout: CSS-driven ({:?}); engine does not position", state.settings().layout);
            for id in &visible {
                println!("  {}", id.as_str());
            }
        }
    }

    Ok(())
}
