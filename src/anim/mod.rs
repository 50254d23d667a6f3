//! Transition planning for filter changes and incremental loads.
//!
//! The coordinator is a pure planner: given the previous and next visible
//! sets (plus FLIP snapshots for CSS-driven layouts) it emits an ordered
//! [`TransitionPlan`] the host executes phase by phase. Two strategies:
//!
//! - **Reflow** (masonry/packed): hide leavers, re-run the layout engine
//!   without them, then show enterers at their freshly computed positions.
//! - **FLIP** (grid/justified): snapshot rects around the class change and
//!   replay inverse transforms so moves read as continuous motion.
//!
//! The phase *ordering* is the contract: hiding completes before layout is
//! recomputed, and an entering item is never shown at its final position
//! without first being invisible. The millisecond constants are tunable.

mod flip;

pub use flip::{MoveDelta, Rect, move_deltas};

use crate::model::{ItemId, LayoutKind};
use std::collections::BTreeMap;

/// Delay before hidden items are removed from the flow, in ms.
pub const HIDE_DELAY_MS: u32 = 250;
/// Duration of a FLIP move back to identity, in ms.
pub const MOVE_DURATION_MS: u32 = 350;
/// Stagger between entering items on a filter change, in ms.
pub const SHOW_STAGGER_MS: u32 = 50;
/// Stagger between entering items on an incremental load, in ms.
pub const LOAD_STAGGER_MS: u32 = 40;
/// Initial scale for never-positioned items fading in.
pub const ENTER_SCALE: f32 = 0.92;
/// Easing for FLIP playback.
pub const MOVE_EASING: &str = "cubic-bezier(0.22, 0.61, 0.36, 1)";

/// Which transition strategy a layout kind uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStrategy {
    /// Absolute-positioned layouts: hide, re-layout, show.
    Reflow,
    /// CSS-driven layouts: First-Last-Invert-Play.
    Flip,
}

impl TransitionStrategy {
    /// Strategy for the configured layout kind.
    pub fn for_layout(kind: LayoutKind) -> Self {
        if kind.is_positioned() {
            TransitionStrategy::Reflow
        } else {
            TransitionStrategy::Flip
        }
    }
}

/// One entering item with its stagger delay.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowItem {
    /// The item to reveal.
    pub id: ItemId,
    /// Delay before its fade/scale-in starts, in ms.
    pub delay_ms: u32,
}

/// A single step of a transition, executed in order by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionPhase {
    /// Fade/scale out the given items, then mark them hidden after the delay.
    Hide {
        /// Items leaving visibility.
        ids: Vec<ItemId>,
        /// How long the hide transition runs before removal from flow.
        delay_ms: u32,
    },
    /// Re-run the layout engine over the new visible set (reflow only).
    Relayout,
    /// Reveal entering items, staggered, from `opacity: 0` / [`ENTER_SCALE`].
    Show {
        /// Entering items with per-item delays.
        items: Vec<ShowItem>,
    },
    /// Apply inverse transforms with transitions disabled (FLIP only).
    Invert {
        /// Surviving items that moved, with their inverse offsets.
        moves: Vec<MoveDelta>,
    },
    /// Animate inverted items back to identity (FLIP only).
    Play {
        /// Playback duration in ms.
        duration_ms: u32,
    },
}

/// An ordered sequence of transition phases.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    /// Strategy the phases belong to.
    pub strategy: TransitionStrategy,
    /// Phases, in execution order.
    pub phases: Vec<TransitionPhase>,
}

impl TransitionPlan {
    /// A plan with nothing to do.
    pub fn noop(strategy: TransitionStrategy) -> Self {
        Self {
            strategy,
            phases: Vec::new(),
        }
    }

    /// Whether the plan performs any work.
    pub fn is_noop(&self) -> bool {
        self.phases.is_empty()
    }
}

/// Plan a reflow transition (masonry/packed).
///
/// `leaving` and `entering` are the visibility diff; `stagger_ms` is
/// [`SHOW_STAGGER_MS`] for filter changes and [`LOAD_STAGGER_MS`] for
/// appended batches. Phases always run hide -> relayout -> show so entering
/// items receive fresh positions while still invisible.
pub fn plan_reflow(leaving: Vec<ItemId>, entering: Vec<ItemId>, stagger_ms: u32) -> TransitionPlan {
    let mut phases = Vec::new();
    if !leaving.is_empty() {
        phases.push(TransitionPhase::Hide {
            ids: leaving,
            delay_ms: HIDE_DELAY_MS,
        });
    }
    phases.push(TransitionPhase::Relayout);
    if !entering.is_empty() {
        let items = entering
            .into_iter()
            .enumerate()
            .map(|(i, id)| ShowItem {
                id,
                delay_ms: i as u32 * stagger_ms,
            })
            .collect();
        phases.push(TransitionPhase::Show { items });
    }
    TransitionPlan {
        strategy: TransitionStrategy::Reflow,
        phases,
    }
}

/// Plan a FLIP transition (grid/justified).
///
/// `first` and `last` are the host-measured rect snapshots around the class
/// change; the diff of their key sets is the visibility diff. Hide runs
/// first, then inverted transforms are applied and played back, then
/// enterers fade in.
pub fn plan_flip(
    first: &BTreeMap<ItemId, Rect>,
    last: &BTreeMap<ItemId, Rect>,
    stagger_ms: u32,
) -> TransitionPlan {
    let leaving: Vec<ItemId> = first
        .keys()
        .filter(|id| !last.contains_key(*id))
        .cloned()
        .collect();
    let entering: Vec<ItemId> = last
        .keys()
        .filter(|id| !first.contains_key(*id))
        .cloned()
        .collect();
    let moves = move_deltas(first, last);

    let mut phases = Vec::new();
    if !leaving.is_empty() {
        phases.push(TransitionPhase::Hide {
            ids: leaving,
            delay_ms: HIDE_DELAY_MS,
        });
    }
    if !moves.is_empty() {
        phases.push(TransitionPhase::Invert { moves });
        phases.push(TransitionPhase::Play {
            duration_ms: MOVE_DURATION_MS,
        });
    }
    if !entering.is_empty() {
        let items = entering
            .into_iter()
            .enumerate()
            .map(|(i, id)| ShowItem {
                id,
                delay_ms: i as u32 * stagger_ms,
            })
            .collect();
        phases.push(TransitionPhase::Show { items });
    }
    TransitionPlan {
        strategy: TransitionStrategy::Flip,
        phases,
    }
}

#[cfg(test)]
#[path = "anim_tests.rs"]
mod tests;
