//! Fixup pre-pass - converts known relative transitions to absolute and
//! patches transitions that cannot take part in a rewrite.
//!
//! Must run exactly once per decoded state, before collection.

use tracing::debug;
use world_data::*;

use crate::{Result, TransitError};

/// Relative transitions made absolute: (campaign, block, selector, base).
const RELATIVE_TO_ABSOLUTE: [(usize, usize, usize, Point); 3] = [
    // Needles --> Downtown East.
    (0, BLOCK0_NEEDLES, 11, Point { x: 30, y: 13 }),
    // Needles --> Downtown West.
    (0, BLOCK0_NEEDLES, 20, Point { x: 1, y: 14 }),
    // Downtown West --> Needles.
    (0, BLOCK0_NEEDLES_DOWNTOWN_WEST, 2, Point { x: 35, y: 29 }),
];

fn relative_to_absolute(state: &mut DecodeState, coord: BlockCoord, selector: usize, base: Point) -> Result<()> {
    let t = state.transition_mut(coord, selector)?;
    if !t.relative {
        return Err(TransitError::NotRelative { coord, selector });
    }

    let old = *t;
    t.make_absolute(base);
    debug!(?coord, selector, ?old, new = ?t, "converted relative transition to absolute");

    Ok(())
}

/// Apply the hardcoded fixups to `state`.
///
/// Fails if a target slot is empty or missing, or if a relative target has
/// already been made absolute.
pub fn fixup_transitions(state: &mut DecodeState) -> Result<()> {
    for (campaign, block, selector, base) in RELATIVE_TO_ABSOLUTE {
        relative_to_absolute(state, BlockCoord::new(campaign, block), selector, base)?;
    }

    // The proton ax room exit goes to the "previous" location, which cannot
    // be rewritten. Point it explicitly at the street outside in Las Vegas.
    let t = state.transition_mut(BlockCoord::new(1, BLOCK1_FAT_FREDDYS), 5)?;
    t.location = LOCATION_LAS_VEGAS;
    t.loc_x = 46;
    t.loc_y = 12;

    Ok(())
}
