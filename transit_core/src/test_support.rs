//! Fixtures shared by the unit tests.

use world_data::*;

use crate::{KnowledgeBase, SubLocDesc, TransEntry};

/// A decoded state with every standard block present and empty.
pub fn empty_state() -> DecodeState {
    DecodeState::with_block_counts(CAMPAIGN_BLOCK_COUNTS)
}

/// An empty state holding every transition the fixup pass expects, in its
/// pre-fixup form.
pub fn fixup_ready_state() -> DecodeState {
    let relative = |location, dx: i8, dy: i8| Transition {
        relative: true,
        loc_x: dx as u8,
        loc_y: dy as u8,
        ..Transition::to(location, 0, 0)
    };

    let mut state = empty_state();
    let needles = &mut state.blocks[0][BLOCK0_NEEDLES];
    needles.set_transition(11, relative(LOCATION_NEEDLES_DOWNTOWN_EAST, 0, 0));
    needles.set_transition(20, relative(LOCATION_NEEDLES_DOWNTOWN_WEST, 0, 0));
    state.blocks[0][BLOCK0_NEEDLES_DOWNTOWN_WEST].set_transition(2, relative(LOCATION_NEEDLES, 0, -1));
    state.blocks[1][BLOCK1_FAT_FREDDYS].set_transition(5, Transition::to(LOCATION_PREVIOUS, 0, 0));
    state
}

/// Annotate a transition as if collected from the given slot.
pub fn entry(campaign: usize, block: usize, selector: usize, trans: Transition) -> TransEntry {
    let coord = BlockCoord::new(campaign, block);
    let from = block_to_location(coord).unwrap();
    let ovr = KnowledgeBase::standard().sub_location_override(SubLocDesc::new(campaign, block, selector));

    TransEntry {
        from_block: coord,
        from_loc: from,
        trans,
        selector,
        from_exact_loc: ovr.and_then(|o| o.from).unwrap_or(from),
        to_exact_loc: ovr.and_then(|o| o.to).unwrap_or(trans.location),
    }
}
