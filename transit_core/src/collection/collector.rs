//! Transition Collector - annotates every transition slot of both campaigns.

use world_data::{block_to_location, BlockCoord, DecodeState, LocationCode, Transition};

use crate::{KnowledgeBase, Result, SubLocDesc};

/// A single transition, annotated with the addressing context needed to
/// replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransEntry {
    pub from_block: BlockCoord,
    /// Regular location of the owning block; never a sub-location.
    pub from_loc: LocationCode,
    /// Record content as collected. Rewrites go to the decoded state, not
    /// here.
    pub trans: Transition,
    pub selector: usize,

    pub from_exact_loc: LocationCode,
    pub to_exact_loc: LocationCode,
}

impl TransEntry {
    /// The slot address used for sub-location overrides.
    pub fn sub_loc_desc(&self) -> SubLocDesc {
        SubLocDesc::new(self.from_block.campaign, self.from_block.block, self.selector)
    }
}

/// Gather every non-empty transition slot, in scan order: campaign 0 before
/// campaign 1, blocks ascending, selectors ascending.
pub fn collect_transitions(state: &DecodeState, kb: &KnowledgeBase) -> Result<Vec<TransEntry>> {
    let mut entries = Vec::new();

    for (campaign, blocks) in state.blocks.iter().enumerate() {
        for (block_idx, block) in blocks.iter().enumerate() {
            let coord = BlockCoord::new(campaign, block_idx);

            for (selector, slot) in block.transitions.iter().enumerate() {
                let Some(trans) = slot else {
                    continue;
                };

                let from = block_to_location(coord)?;
                let ovr = kb.sub_location_override(SubLocDesc::new(campaign, block_idx, selector));

                entries.push(TransEntry {
                    from_block: coord,
                    from_loc: from,
                    trans: *trans,
                    selector,
                    from_exact_loc: ovr.and_then(|o| o.from).unwrap_or(from),
                    to_exact_loc: ovr.and_then(|o| o.to).unwrap_or(trans.location),
                });
            }
        }
    }

    Ok(entries)
}
