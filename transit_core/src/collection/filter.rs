//! Filter Policy Evaluator - decides which transitions belong in the usable
//! subgraph.

use tracing::debug;
use world_data::{LocPair, BLOCK0_WORLD_MAP, CLASS_SHOP, LOCATION_PREVIOUS, LOCATION_WORLD_MAP};

use super::TransEntry;
use crate::{CollectConfig, KnowledgeBase};

/// Reason a transition was dropped from the filtered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    FromWorldMap,
    ToWorldMap,
    Relative,
    Shop,
    Derelict,
    Previous,
    PostSewers,
    AutoIntra,
    HardcodedIntra,
}

impl DiscardReason {
    /// Short description used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscardReason::FromWorldMap => "from world map",
            DiscardReason::ToWorldMap => "to world map",
            DiscardReason::Relative => "relative",
            DiscardReason::Shop => "shop",
            DiscardReason::Derelict => "derelict",
            DiscardReason::Previous => "previous",
            DiscardReason::PostSewers => "post sewers",
            DiscardReason::AutoIntra => "auto intra filter",
            DiscardReason::HardcodedIntra => "hardcoded intra filter",
        }
    }
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply the filter rules in order; the first matching rule drops the entry.
pub fn discard_reason(
    entry: &TransEntry,
    cfg: &CollectConfig,
    kb: &KnowledgeBase,
) -> Option<DiscardReason> {
    let t = &entry.trans;

    if !cfg.keep_world {
        if entry.from_block.campaign == 0 && entry.from_block.block == BLOCK0_WORLD_MAP {
            return Some(DiscardReason::FromWorldMap);
        }
        if t.location == LOCATION_WORLD_MAP {
            return Some(DiscardReason::ToWorldMap);
        }
    }

    if !cfg.keep_relative && t.relative {
        return Some(DiscardReason::Relative);
    }

    if !cfg.keep_shops && t.to_class == CLASS_SHOP {
        return Some(DiscardReason::Shop);
    }

    if !cfg.keep_derelict && t.is_derelict() {
        return Some(DiscardReason::Derelict);
    }

    if !cfg.keep_previous && t.location == LOCATION_PREVIOUS {
        return Some(DiscardReason::Previous);
    }

    if !cfg.keep_post_sewers && kb.is_post_sewers(t.location) {
        return Some(DiscardReason::PostSewers);
    }

    if !cfg.keep_auto_intra
        && t.location == entry.from_loc
        && kb.sub_location_override(entry.sub_loc_desc()).is_none()
    {
        return Some(DiscardReason::AutoIntra);
    }

    if !cfg.keep_hardcoded_intra && kb.is_intra(LocPair::new(entry.from_loc, t.location)) {
        return Some(DiscardReason::HardcodedIntra);
    }

    None
}

/// Whether an entry should be kept according to `cfg`.
pub fn should_keep_transition(entry: &TransEntry, cfg: &CollectConfig, kb: &KnowledgeBase) -> bool {
    match discard_reason(entry, cfg, kb) {
        Some(reason) => {
            debug!(
                from = %kb.location_string(entry.from_exact_loc),
                to = %kb.location_string(entry.to_exact_loc),
                block = ?entry.from_block,
                selector = entry.selector,
                %reason,
                "discarding transition"
            );
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::*;
    use world_data::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::standard()
    }

    #[test]
    fn test_keeps_plain_transition() {
        let e = entry(0, BLOCK0_QUARTZ, 1, Transition::to(LOCATION_COURTHOUSE, 2, 2));
        assert_eq!(discard_reason(&e, &CollectConfig::default(), kb()), None);
    }

    #[test]
    fn test_world_map_rules() {
        let from_world = entry(0, BLOCK0_WORLD_MAP, 0, Transition::to(LOCATION_QUARTZ, 2, 2));
        let to_world = entry(0, BLOCK0_QUARTZ, 0, Transition::to(LOCATION_WORLD_MAP, 2, 2));
        let cfg = CollectConfig::default();

        assert_eq!(discard_reason(&from_world, &cfg, kb()), Some(DiscardReason::FromWorldMap));
        assert_eq!(discard_reason(&to_world, &cfg, kb()), Some(DiscardReason::ToWorldMap));

        let cfg = CollectConfig {
            keep_world: true,
            ..Default::default()
        };
        assert_eq!(discard_reason(&from_world, &cfg, kb()), None);
        assert_eq!(discard_reason(&to_world, &cfg, kb()), None);
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // Relative and derelict both apply; relative comes first.
        let t = Transition {
            relative: true,
            derelict: true,
            ..Transition::to(LOCATION_COURTHOUSE, 1, 1)
        };
        let e = entry(0, BLOCK0_QUARTZ, 3, t);

        assert_eq!(
            discard_reason(&e, &CollectConfig::default(), kb()),
            Some(DiscardReason::Relative)
        );

        let cfg = CollectConfig {
            keep_relative: true,
            ..Default::default()
        };
        assert_eq!(discard_reason(&e, &cfg, kb()), Some(DiscardReason::Derelict));
    }

    #[test]
    fn test_shop_and_previous() {
        let shop = Transition {
            to_class: CLASS_SHOP,
            ..Transition::to(LOCATION_QUARTZ, 1, 1)
        };
        let e = entry(0, BLOCK0_QUARTZ, 3, shop);
        assert_eq!(discard_reason(&e, &CollectConfig::default(), kb()), Some(DiscardReason::Shop));

        let e = entry(0, BLOCK0_QUARTZ, 3, Transition::to(LOCATION_PREVIOUS, 0, 0));
        assert_eq!(
            discard_reason(&e, &CollectConfig::default(), kb()),
            Some(DiscardReason::Previous)
        );
    }

    #[test]
    fn test_post_sewers() {
        let e = entry(1, BLOCK1_LAS_VEGAS, 9, Transition::to(LOCATION_FINSTERS_BRAIN, 1, 1));

        assert!(!should_keep_transition(&e, &CollectConfig::default(), kb()));
        let cfg = CollectConfig {
            keep_post_sewers: true,
            ..Default::default()
        };
        assert!(should_keep_transition(&e, &cfg, kb()));
    }

    #[test]
    fn test_auto_intra_respects_sub_locations() {
        // Highpool -> Highpool with no override: an apparent self-loop.
        let e = entry(0, BLOCK0_HIGHPOOL, 0, Transition::to(LOCATION_HIGHPOOL, 1, 1));
        assert_eq!(
            discard_reason(&e, &CollectConfig::default(), kb()),
            Some(DiscardReason::AutoIntra)
        );

        // Selector 1 enters the cave, so it is kept.
        let e = entry(0, BLOCK0_HIGHPOOL, 1, Transition::to(LOCATION_HIGHPOOL, 1, 1));
        assert_eq!(discard_reason(&e, &CollectConfig::default(), kb()), None);
    }

    #[test]
    fn test_hardcoded_intra() {
        let e = entry(
            0,
            BLOCK0_NEEDLES_DOWNTOWN_WEST,
            4,
            Transition::to(LOCATION_NEEDLES_DOWNTOWN_EAST, 1, 1),
        );
        assert_eq!(
            discard_reason(&e, &CollectConfig::default(), kb()),
            Some(DiscardReason::HardcodedIntra)
        );
        assert_eq!(discard_reason(&e, &CollectConfig::keep_all(), kb()), None);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let cfg = CollectConfig::default();
        let entries = vec![
            entry(0, BLOCK0_QUARTZ, 1, Transition::to(LOCATION_COURTHOUSE, 2, 2)),
            entry(0, BLOCK0_QUARTZ, 2, Transition::to(LOCATION_WORLD_MAP, 2, 2)),
            entry(0, BLOCK0_HIGHPOOL, 1, Transition::to(LOCATION_HIGHPOOL, 1, 1)),
            entry(0, BLOCK0_HIGHPOOL, 0, Transition::to(LOCATION_HIGHPOOL, 1, 1)),
        ];

        let once: Vec<_> = entries
            .iter()
            .filter(|e| should_keep_transition(e, &cfg, kb()))
            .cloned()
            .collect();
        let twice: Vec<_> = once
            .iter()
            .filter(|e| should_keep_transition(e, &cfg, kb()))
            .cloned()
            .collect();

        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
    }
}
