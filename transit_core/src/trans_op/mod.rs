//! Transition ops - swap the content of two travel connections.
//!
//! A [`TransOp`] names two location pairs, A and B, and four transition sets:
//!
//! 1. A.From --> A.To
//! 2. A.From <-- A.To (A return trip)
//! 3. B.From --> B.To
//! 4. B.From <-- B.To (B return trip)
//!
//! Executing the op rewrites A.From --> A.To with B's forward content, and
//! B.To's exits (its return trip plus any one-way-up dead ends) with A's
//! return content. Slot identity never changes; only the travel fields of
//! the existing records are overwritten.
//!
//! Reads come from the filtered graph and writes go to the unfiltered graph:
//! every physical selector being replaced must get new content, but content
//! is only taken from selectors known to form a round trip.

mod descriptor;

pub use descriptor::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use world_data::{BlockCoord, DecodeState, LocPair, Transition};

use crate::{Collection, KnowledgeBase, TransEntry, XListRole};

/// Replace one connection's content with another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransOp {
    pub a: LocPair,
    pub b: LocPair,
}

impl TransOp {
    /// Create an op replacing `a` with `b`.
    pub fn new(a: LocPair, b: LocPair) -> Self {
        Self { a, b }
    }
}

/// One of the transition sets an op is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpSet {
    AForward,
    AReverse,
    BForward,
    BReverse,
}

/// Why an op was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The graph has no transitions for this set.
    NoRoundTrip(OpSet),
    /// Exception lists removed every transition from this set.
    FilteredToZero(OpSet),
    /// A target slot no longer exists in the decoded state.
    StaleSlot { coord: BlockCoord, selector: usize },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoRoundTrip(set) => write!(f, "no round trip ({:?} is empty)", set),
            SkipReason::FilteredToZero(set) => write!(f, "{:?} filtered to 0", set),
            SkipReason::StaleSlot { coord, selector } => write!(
                f,
                "no transition at campaign={} block={} selector={}",
                coord.campaign, coord.block, selector
            ),
        }
    }
}

/// Result of executing an op. Skipping is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransOpOutcome {
    Applied {
        forward: usize,
        reverse: usize,
        one_way_up: usize,
    },
    Skipped(SkipReason),
}

impl TransOpOutcome {
    /// Whether the op rewrote any slots.
    pub fn is_applied(&self) -> bool {
        matches!(self, TransOpOutcome::Applied { .. })
    }
}

/// Overwrite the travel fields of `dst` with those of `src`. Fields tying the
/// record to its owning block are preserved.
pub fn copy_transition(dst: &mut Transition, src: &Transition) {
    dst.relative = src.relative;
    dst.prompt = src.prompt;
    dst.loc_x = src.loc_x;
    dst.loc_y = src.loc_y;
    dst.location = src.location;
}

/// Apply the per-pair exception lists for `role` to a set of entries.
///
/// Entries are keyed by their inexact pair: the owning block's regular
/// location and the record's raw destination.
pub fn filter_xlist<'a, I>(entries: I, role: XListRole, kb: &KnowledgeBase) -> Vec<&'a TransEntry>
where
    I: IntoIterator<Item = &'a TransEntry>,
{
    entries
        .into_iter()
        .filter(|e| {
            let pair = LocPair::new(e.from_loc, e.trans.location);
            let Some(xlist) = kb.xlist(pair, role) else {
                return true;
            };
            if !xlist.white.is_empty() && !xlist.white.contains(&e.selector) {
                debug!(
                    loc = %kb.location_string(e.from_loc),
                    selector = e.selector,
                    ?role,
                    "delisting transition"
                );
                return false;
            }
            if xlist.black.contains(&e.selector) {
                debug!(
                    loc = %kb.location_string(e.from_loc),
                    selector = e.selector,
                    ?role,
                    "blacklisting transition"
                );
                return false;
            }
            true
        })
        .collect()
}

/// Cycle through parallel source selectors.
fn pick<'a>(idx: usize, entries: &[&'a TransEntry]) -> &'a TransEntry {
    entries[idx % entries.len()]
}

/// The transition sets needed to execute a single op.
struct TransOpCtxt<'c> {
    a_fwd: Vec<&'c TransEntry>,
    a_rev: Vec<&'c TransEntry>,
    b_fwd: Vec<&'c TransEntry>,
    b_rev: Vec<&'c TransEntry>,
    b_rev_1way_up: Vec<&'c TransEntry>,
}

/// One set of an op: empty means no round trip; exception lists must leave
/// at least one entry.
fn gather<'c>(
    set: OpSet,
    entries: &'c [TransEntry],
    role: XListRole,
    kb: &KnowledgeBase,
) -> Result<Vec<&'c TransEntry>, SkipReason> {
    if entries.is_empty() {
        return Err(SkipReason::NoRoundTrip(set));
    }
    let kept = filter_xlist(entries, role, kb);
    if kept.is_empty() {
        return Err(SkipReason::FilteredToZero(set));
    }
    Ok(kept)
}

impl<'c> TransOpCtxt<'c> {
    fn assemble(coll: &'c Collection<'_>, op: TransOp) -> Result<Self, SkipReason> {
        let kb = coll.knowledge();

        Ok(Self {
            a_fwd: gather(OpSet::AForward, coll.get_unfiltered(op.a), XListRole::Write, kb)?,
            a_rev: gather(OpSet::AReverse, coll.get_filtered(op.a.mirror()), XListRole::Read, kb)?,
            b_fwd: gather(OpSet::BForward, coll.get_filtered(op.b), XListRole::Read, kb)?,
            b_rev: gather(OpSet::BReverse, coll.get_unfiltered(op.b.mirror()), XListRole::Write, kb)?,
            // May legitimately be empty.
            b_rev_1way_up: filter_xlist(coll.get_1way_up(op.b.to), XListRole::Write, kb),
        })
    }
}

/// A planned overwrite of one slot.
struct PlannedWrite<'c> {
    dst: &'c TransEntry,
    src: &'c TransEntry,
    kind: &'static str,
}

/// Execute `op` against `state`, overwriting transition records in place.
///
/// For example, replacing the Highpool->workshop connection (A) with
/// AgCenter->cellar (B):
///
/// 1. Highpool->workshop becomes Highpool->cellar (forward route)
/// 2. cellar->AgCenter becomes cellar->Highpool (reverse route)
/// 3. any one-way-up exit of the cellar also leads to Highpool, so the
///    player leaves the way they came
///
/// Never fails: an inapplicable op is logged and leaves `state` untouched.
/// `coll` is not updated; later ops read the content it was built with.
pub fn exec_trans_op(coll: &Collection<'_>, state: &mut DecodeState, op: TransOp) -> TransOpOutcome {
    let kb = coll.knowledge();

    let ctxt = match TransOpCtxt::assemble(coll, op) {
        Ok(ctxt) => ctxt,
        Err(reason) => {
            warn!(op = %describe_op(kb, op), %reason, "ignoring transition op");
            return TransOpOutcome::Skipped(reason);
        }
    };

    let mut writes = Vec::new();
    for (i, &dst) in ctxt.a_fwd.iter().enumerate() {
        writes.push(PlannedWrite {
            dst,
            src: pick(i, &ctxt.b_fwd),
            kind: "forward route",
        });
    }
    for (i, &dst) in ctxt.b_rev.iter().enumerate() {
        writes.push(PlannedWrite {
            dst,
            src: pick(i, &ctxt.a_rev),
            kind: "reverse route",
        });
    }
    for (i, &dst) in ctxt.b_rev_1way_up.iter().enumerate() {
        writes.push(PlannedWrite {
            dst,
            src: pick(i, &ctxt.a_rev),
            kind: "one way up",
        });
    }

    // Validate every target before touching anything.
    for w in &writes {
        let present = state
            .block(w.dst.from_block)
            .map(|b| b.transition(w.dst.selector).is_some())
            .unwrap_or(false);
        if !present {
            let reason = SkipReason::StaleSlot {
                coord: w.dst.from_block,
                selector: w.dst.selector,
            };
            warn!(op = %describe_op(kb, op), %reason, "ignoring transition op");
            return TransOpOutcome::Skipped(reason);
        }
    }

    info!(op = %describe_op(kb, op), "setting transition");

    for w in &writes {
        debug!(
            from = %kb.location_full_string(w.dst.from_exact_loc),
            to = %kb.location_full_string(w.dst.to_exact_loc),
            selector = w.dst.selector,
            src_from = %kb.location_full_string(w.src.from_exact_loc),
            src_to = %kb.location_full_string(w.src.to_exact_loc),
            src_selector = w.src.selector,
            kind = w.kind,
            "replacing transition"
        );
        if let Ok(t) = state.transition_mut(w.dst.from_block, w.dst.selector) {
            copy_transition(t, &w.src.trans);
        }
    }

    TransOpOutcome::Applied {
        forward: ctxt.a_fwd.len(),
        reverse: ctxt.b_rev.len(),
        one_way_up: ctxt.b_rev_1way_up.len(),
    }
}
