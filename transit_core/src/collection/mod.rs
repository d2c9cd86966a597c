//! Collection - the graph store holding every transition among all blocks.
//!
//! Two adjacency maps are kept:
//! - **unfiltered**: every collected transition
//! - **filtered**: transitions kept by a [`CollectConfig`], pruned so that
//!   every directed pair has its mirror (round-trip closure)
//!
//! Both maps are keyed `[exact-from][exact-to]` and hold entries in scan
//! order. Entries are never added or removed after construction.

mod collector;
mod filter;

pub use collector::*;
pub use filter::*;

use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use world_data::{DecodeState, LocPair, LocationCode};

use crate::{fixup_transitions, CollectConfig, KnowledgeBase, Result};

/// Adjacency map: exact-from → exact-to → parallel entries.
pub type LocPairMap = BTreeMap<LocationCode, BTreeMap<LocationCode, Vec<TransEntry>>>;

fn add_entry(map: &mut LocPairMap, entry: TransEntry) {
    map.entry(entry.from_exact_loc)
        .or_default()
        .entry(entry.to_exact_loc)
        .or_default()
        .push(entry);
}

fn lookup(map: &LocPairMap, pair: LocPair) -> &[TransEntry] {
    map.get(&pair.from)
        .and_then(|m| m.get(&pair.to))
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

fn has_pair(map: &LocPairMap, pair: LocPair) -> bool {
    !lookup(map, pair).is_empty()
}

/// The set of all transitions among all blocks, plus the usable subset.
#[derive(Debug, Clone)]
pub struct Collection<'kb> {
    kb: &'kb KnowledgeBase,
    unfiltered: LocPairMap,
    filtered: LocPairMap,
}

impl<'kb> Collection<'kb> {
    /// Run the fixup pre-pass on `state`, then collect and filter every
    /// transition.
    ///
    /// The fixup pass mutates `state` and must only run once per decoded
    /// state; a second build over the same state fails.
    pub fn build(
        state: &mut DecodeState,
        cfg: &CollectConfig,
        kb: &'kb KnowledgeBase,
    ) -> Result<Self> {
        fixup_transitions(state)?;
        let entries = collect_transitions(state, kb)?;
        Ok(Self::from_entries(entries, cfg, kb))
    }

    /// Build a collection from already-collected entries.
    pub fn from_entries(entries: Vec<TransEntry>, cfg: &CollectConfig, kb: &'kb KnowledgeBase) -> Self {
        let mut coll = Self {
            kb,
            unfiltered: LocPairMap::new(),
            filtered: LocPairMap::new(),
        };

        for entry in entries {
            if should_keep_transition(&entry, cfg, kb) {
                add_entry(&mut coll.filtered, entry.clone());
            }
            add_entry(&mut coll.unfiltered, entry);
        }

        coll.prune_one_way();
        coll
    }

    /// Remove every filtered pair whose mirror is absent. Removal never
    /// creates a new violation, so a single pass over a snapshot suffices.
    fn prune_one_way(&mut self) {
        let doomed: Vec<LocPair> = self
            .filtered_pairs()
            .filter(|pair| !has_pair(&self.filtered, pair.mirror()))
            .collect();

        for pair in doomed {
            debug!(
                from = %self.kb.location_full_string(pair.from),
                to = %self.kb.location_full_string(pair.to),
                "discarding entry: no round trip"
            );
            if let Some(m) = self.filtered.get_mut(&pair.from) {
                m.remove(&pair.to);
                if m.is_empty() {
                    self.filtered.remove(&pair.from);
                }
            }
        }
    }

    /// The knowledge base this collection was built with.
    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Every collected transition.
    pub fn unfiltered(&self) -> &LocPairMap {
        &self.unfiltered
    }

    /// The usable, round-trip-closed subgraph.
    pub fn filtered(&self) -> &LocPairMap {
        &self.filtered
    }

    /// Unfiltered entries for a directed pair; empty if none.
    pub fn get_unfiltered(&self, pair: LocPair) -> &[TransEntry] {
        lookup(&self.unfiltered, pair)
    }

    /// Filtered entries for a directed pair; empty if none.
    pub fn get_filtered(&self, pair: LocPair) -> &[TransEntry] {
        lookup(&self.filtered, pair)
    }

    /// The filtered forward (`from → to`) and return (`to → from`) sets.
    pub fn get_from_to(&self, pair: LocPair) -> (&[TransEntry], &[TransEntry]) {
        (self.get_filtered(pair), self.get_filtered(pair.mirror()))
    }

    /// Directed pairs of the filtered map, ascending.
    pub fn filtered_pairs(&self) -> impl Iterator<Item = LocPair> + '_ {
        self.filtered
            .iter()
            .flat_map(|(from, m)| m.keys().map(move |to| LocPair::new(*from, *to)))
    }

    /// Total number of unfiltered entries.
    pub fn unfiltered_len(&self) -> usize {
        self.unfiltered.values().flat_map(|m| m.values()).map(Vec::len).sum()
    }

    /// Total number of filtered entries.
    pub fn filtered_len(&self) -> usize {
        self.filtered.values().flat_map(|m| m.values()).map(Vec::len).sum()
    }

    /// Unfiltered transitions leaving `from` that lead to a shallower
    /// location and have no return trip at all.
    pub fn get_1way_up(&self, from: LocationCode) -> Vec<&TransEntry> {
        let Some(m) = self.unfiltered.get(&from) else {
            return Vec::new();
        };
        let from_depth = self.kb.depth(from);

        m.iter()
            .filter(|(to, _)| self.kb.depth(**to) < from_depth)
            .filter(|(to, _)| !has_pair(&self.unfiltered, LocPair::new(**to, from)))
            .flat_map(|(_, entries)| entries.iter())
            .collect()
    }

    /// Round trips of the filtered map that lead to an equal or deeper
    /// location, one direction per pair, sorted by (from, to).
    pub fn round_trips(&self) -> Vec<LocPair> {
        let mut seen: HashSet<LocPair> = HashSet::new();
        let mut pairs = Vec::new();

        for pair in self.filtered_pairs() {
            if self.kb.depth(pair.to) < self.kb.depth(pair.from) {
                continue;
            }
            if seen.contains(&pair.mirror()) {
                continue;
            }
            seen.insert(pair);
            pairs.push(pair);
        }

        pairs.sort();
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use world_data::*;

    fn quartz_state() -> DecodeState {
        let mut state = empty_state();
        let quartz = &mut state.blocks[0][BLOCK0_QUARTZ];
        quartz.set_transition(0, Transition::to(LOCATION_COURTHOUSE, 1, 1));
        quartz.set_transition(1, Transition::to(LOCATION_COURTHOUSE, 2, 2));
        quartz.set_transition(2, Transition::to(LOCATION_SCOTTS_BAR, 3, 3));
        quartz.set_transition(3, Transition::to(LOCATION_WORLD_MAP, 4, 4));
        quartz.set_transition(5, Transition::to(LOCATION_STAGE_COACH_INN, 5, 5));
        // Courthouse and Scott's bar lead back; the inn does not.
        state.blocks[0][10].set_transition(0, Transition::to(LOCATION_QUARTZ, 6, 6));
        state.blocks[0][6].set_transition(0, Transition::to(LOCATION_QUARTZ, 7, 7));
        state.blocks[0][7].set_transition(0, Transition::to(LOCATION_WORLD_MAP, 8, 8));
        state
    }

    fn build(state: &DecodeState, cfg: &CollectConfig) -> Collection<'static> {
        let entries = collect_transitions(state, KnowledgeBase::standard()).unwrap();
        Collection::from_entries(entries, cfg, KnowledgeBase::standard())
    }

    fn assert_round_trip_closed(coll: &Collection) {
        for pair in coll.filtered_pairs() {
            assert!(
                !coll.get_filtered(pair.mirror()).is_empty(),
                "missing mirror of {:?}",
                pair
            );
        }
    }

    #[test]
    fn test_unfiltered_keeps_everything() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::default());

        assert_eq!(coll.unfiltered_len(), state.transition_count());
        let quartz_courthouse = LocPair::new(LOCATION_QUARTZ, LOCATION_COURTHOUSE);
        let selectors: Vec<_> = coll
            .get_unfiltered(quartz_courthouse)
            .iter()
            .map(|e| e.selector)
            .collect();
        assert_eq!(selectors, vec![0, 1]);
    }

    #[test]
    fn test_filtered_round_trip_closure() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::default());

        assert_round_trip_closed(&coll);
        // One-sided Quartz -> inn is pruned.
        assert!(coll
            .get_filtered(LocPair::new(LOCATION_QUARTZ, LOCATION_STAGE_COACH_INN))
            .is_empty());
        assert_eq!(
            coll.get_filtered(LocPair::new(LOCATION_QUARTZ, LOCATION_COURTHOUSE)).len(),
            2
        );
        assert_eq!(coll.filtered_len(), 5);
    }

    #[test]
    fn test_closure_with_keep_all() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::keep_all());

        assert_round_trip_closed(&coll);
        // World map has no transitions back in this data, so those go too.
        assert!(coll
            .get_filtered(LocPair::new(LOCATION_QUARTZ, LOCATION_WORLD_MAP))
            .is_empty());
        assert!(!coll.filtered().contains_key(&LOCATION_STAGE_COACH_INN));
    }

    #[test]
    fn test_get_from_to() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::default());

        let (fwd, rev) = coll.get_from_to(LocPair::new(LOCATION_QUARTZ, LOCATION_SCOTTS_BAR));
        assert_eq!(fwd.len(), 1);
        assert_eq!(rev.len(), 1);
        assert_eq!(rev[0].from_loc, LOCATION_SCOTTS_BAR);

        let (fwd, rev) = coll.get_from_to(LocPair::new(LOCATION_QUARTZ, LOCATION_HIGHPOOL));
        assert!(fwd.is_empty() && rev.is_empty());
    }

    #[test]
    fn test_get_1way_up() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::default());

        // The inn's only exit leads to the world map with no way back.
        let up = coll.get_1way_up(LOCATION_STAGE_COACH_INN);
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].trans.location, LOCATION_WORLD_MAP);

        // Scott's bar -> Quartz is upward but has a return trip.
        assert!(coll.get_1way_up(LOCATION_SCOTTS_BAR).is_empty());
        assert!(coll.get_1way_up(LOCATION_HIGHPOOL).is_empty());

        for loc in [LOCATION_QUARTZ, LOCATION_STAGE_COACH_INN, LOCATION_COURTHOUSE] {
            for e in coll.get_1way_up(loc) {
                let back = LocPair::new(e.to_exact_loc, e.from_exact_loc);
                assert!(coll.get_unfiltered(back).is_empty());
            }
        }
    }

    #[test]
    fn test_1way_up_ignores_downward() {
        let state = quartz_state();
        let coll = build(&state, &CollectConfig::default());

        // Quartz -> inn is one way but leads deeper.
        let up = coll.get_1way_up(LOCATION_QUARTZ);
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].trans.location, LOCATION_WORLD_MAP);
    }

    #[test]
    fn test_round_trips() {
        let mut state = quartz_state();
        // Courthouse <-> Scott's bar: equal depth, both directions.
        state.blocks[0][10].set_transition(1, Transition::to(LOCATION_SCOTTS_BAR, 1, 1));
        state.blocks[0][6].set_transition(1, Transition::to(LOCATION_COURTHOUSE, 1, 1));
        let coll = build(&state, &CollectConfig::default());

        let trips = coll.round_trips();
        assert_eq!(
            trips,
            vec![
                LocPair::new(LOCATION_QUARTZ, LOCATION_SCOTTS_BAR),
                LocPair::new(LOCATION_QUARTZ, LOCATION_COURTHOUSE),
                LocPair::new(LOCATION_SCOTTS_BAR, LOCATION_COURTHOUSE),
            ]
        );

        let mut sorted = trips.clone();
        sorted.sort();
        assert_eq!(trips, sorted);
        for t in &trips {
            assert!(!trips.contains(&t.mirror()));
        }
    }

    #[test]
    fn test_post_sewers_scenario() {
        let mut state = empty_state();
        state.blocks[1][BLOCK1_LAS_VEGAS].set_transition(4, Transition::to(LOCATION_FINSTERS_BRAIN, 1, 1));
        state.blocks[1][11].set_transition(0, Transition::to(LOCATION_LAS_VEGAS, 2, 2));
        let pair = LocPair::new(LOCATION_LAS_VEGAS, LOCATION_FINSTERS_BRAIN);

        let coll = build(&state, &CollectConfig::default());
        assert_eq!(coll.get_unfiltered(pair).len(), 1);
        assert!(coll.get_filtered(pair).is_empty());
        // Its return trip loses its partner and is pruned too.
        assert!(coll.get_filtered(pair.mirror()).is_empty());

        let cfg = CollectConfig {
            keep_post_sewers: true,
            ..Default::default()
        };
        let coll = build(&state, &cfg);
        assert_eq!(coll.get_unfiltered(pair).len(), 1);
        assert_eq!(coll.get_filtered(pair).len(), 1);
        assert_eq!(coll.get_filtered(pair.mirror()).len(), 1);
    }

    #[test]
    fn test_build_runs_fixup_once() {
        let mut state = fixup_ready_state();
        let coll = Collection::build(&mut state, &CollectConfig::default(), KnowledgeBase::standard());
        assert!(coll.is_ok());

        let again = Collection::build(&mut state, &CollectConfig::default(), KnowledgeBase::standard());
        assert!(matches!(again, Err(crate::TransitError::NotRelative { .. })));
    }
}
