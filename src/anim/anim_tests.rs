//! Unit tests for transition planning.

use super::*;

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

fn rect(x: f32, y: f32) -> Rect {
    Rect {
        x,
        y,
        width: 100.0,
        height: 100.0,
    }
}

fn phase_kind(phase: &TransitionPhase) -> &'static str {
    match phase {
        TransitionPhase::Hide { .. } => "hide",
        TransitionPhase::Relayout => "relayout",
        TransitionPhase::Show { .. } => "show",
        TransitionPhase::Invert { .. } => "invert",
        TransitionPhase::Play { .. } => "play",
    }
}

#[test]
fn strategy_follows_layout_kind() {
    use crate::model::LayoutKind;
    assert_eq!(
        TransitionStrategy::for_layout(LayoutKind::Masonry),
        TransitionStrategy::Reflow
    );
    assert_eq!(
        TransitionStrategy::for_layout(LayoutKind::Packed),
        TransitionStrategy::Reflow
    );
    assert_eq!(
        TransitionStrategy::for_layout(LayoutKind::Grid),
        TransitionStrategy::Flip
    );
    assert_eq!(
        TransitionStrategy::for_layout(LayoutKind::Justified),
        TransitionStrategy::Flip
    );
}

#[test]
fn reflow_orders_hide_before_relayout_before_show() {
    let plan = plan_reflow(
        vec![id("gone")],
        vec![id("new1"), id("new2")],
        SHOW_STAGGER_MS,
    );
    let kinds: Vec<_> = plan.phases.iter().map(phase_kind).collect();
    assert_eq!(kinds, vec!["hide", "relayout", "show"]);
}

#[test]
fn reflow_hide_uses_hide_delay() {
    let plan = plan_reflow(vec![id("gone")], vec![], SHOW_STAGGER_MS);
    match &plan.phases[0] {
        TransitionPhase::Hide { ids, delay_ms } => {
            assert_eq!(ids, &[id("gone")]);
            assert_eq!(*delay_ms, HIDE_DELAY_MS);
        }
        other => panic!("expected hide, got {other:?}"),
    }
}

#[test]
fn reflow_show_staggers_increments() {
    let plan = plan_reflow(
        vec![],
        vec![id("a"), id("b"), id("c")],
        LOAD_STAGGER_MS,
    );
    let TransitionPhase::Show { items } = plan.phases.last().unwrap() else {
        panic!("expected show phase");
    };
    let delays: Vec<u32> = items.iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![0, 40, 80]);
}

#[test]
fn reflow_with_no_diff_still_relayouts() {
    // A resize changes no visibility but must re-run the layout.
    let plan = plan_reflow(vec![], vec![], SHOW_STAGGER_MS);
    assert_eq!(plan.phases, vec![TransitionPhase::Relayout]);
    assert!(!plan.is_noop());
}

#[test]
fn flip_emits_invert_then_play() {
    let first = BTreeMap::from([(id("a"), rect(0.0, 0.0)), (id("b"), rect(200.0, 0.0))]);
    let last = BTreeMap::from([(id("a"), rect(0.0, 0.0)), (id("b"), rect(0.0, 120.0))]);
    let plan = plan_flip(&first, &last, SHOW_STAGGER_MS);
    let kinds: Vec<_> = plan.phases.iter().map(phase_kind).collect();
    assert_eq!(kinds, vec!["invert", "play"]);

    let TransitionPhase::Invert { moves } = &plan.phases[0] else {
        panic!("expected invert");
    };
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].id, id("b"));
    assert_eq!(moves[0].dx, 200.0);
    assert_eq!(moves[0].dy, -120.0);
}

#[test]
fn flip_diffs_visibility_from_snapshots() {
    let first = BTreeMap::from([(id("gone"), rect(0.0, 0.0)), (id("stay"), rect(0.0, 100.0))]);
    let last = BTreeMap::from([(id("stay"), rect(0.0, 0.0)), (id("new"), rect(0.0, 100.0))]);
    let plan = plan_flip(&first, &last, SHOW_STAGGER_MS);
    let kinds: Vec<_> = plan.phases.iter().map(phase_kind).collect();
    // Hide runs first; enterers are shown only after surviving moves play.
    assert_eq!(kinds, vec!["hide", "invert", "play", "show"]);
}

#[test]
fn flip_identical_snapshots_are_noop() {
    let snap = BTreeMap::from([(id("a"), rect(0.0, 0.0))]);
    let plan = plan_flip(&snap, &snap, SHOW_STAGGER_MS);
    assert!(plan.is_noop());
}
