//! Decoded-state structure: campaigns, blocks, and transition records.

use serde::{Deserialize, Serialize};

use crate::{LocationCode, Result, WorldError};

/// Destination class tag marking a shop.
pub const CLASS_SHOP: u8 = 0x0d;

/// Identifies one source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockCoord {
    /// Campaign index, 0 or 1.
    pub campaign: usize,
    pub block: usize,
}

impl BlockCoord {
    /// Create a block coordinate.
    pub fn new(campaign: usize, block: usize) -> Self {
        Self { campaign, block }
    }
}

/// Map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    /// Create a point.
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// A single decoded transition record.
///
/// `to_class` and `to_selector` tie the record to its owning block's action
/// tables; the remaining fields describe where the transition leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Transition {
    /// Coordinates are signed offsets from the player's position.
    pub relative: bool,
    /// Ask the player before travelling.
    pub prompt: bool,
    pub derelict: bool,
    pub loc_x: u8,
    pub loc_y: u8,
    pub location: LocationCode,
    pub to_class: u8,
    pub to_selector: u8,
}

impl Transition {
    /// An absolute transition to `location` at (`x`, `y`).
    pub fn to(location: LocationCode, x: u8, y: u8) -> Self {
        Self {
            location,
            loc_x: x,
            loc_y: y,
            ..Default::default()
        }
    }

    /// Whether the destination is a derelict building.
    pub fn is_derelict(&self) -> bool {
        self.derelict
    }

    /// Convert a relative transition to an absolute one anchored at `base`.
    pub fn make_absolute(&mut self, base: Point) {
        if !self.relative {
            return;
        }
        self.loc_x = base.x.wrapping_add_signed(self.loc_x as i8);
        self.loc_y = base.y.wrapping_add_signed(self.loc_y as i8);
        self.relative = false;
    }
}

/// One decoded block. The transition table is indexed by selector; empty
/// slots are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub transitions: Vec<Option<Transition>>,
}

impl Block {
    /// Create a block with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set_transition`].
    pub fn with_transition(mut self, selector: usize, transition: Transition) -> Self {
        self.set_transition(selector, transition);
        self
    }

    /// Place a transition in the given slot, growing the table as needed.
    pub fn set_transition(&mut self, selector: usize, transition: Transition) {
        if self.transitions.len() <= selector {
            self.transitions.resize(selector + 1, None);
        }
        self.transitions[selector] = Some(transition);
    }

    /// The transition in a slot, if the slot exists and is non-empty.
    pub fn transition(&self, selector: usize) -> Option<&Transition> {
        self.transitions.get(selector).and_then(Option::as_ref)
    }

    /// Mutable access to a non-empty slot.
    pub fn transition_mut(&mut self, selector: usize) -> Option<&mut Transition> {
        self.transitions.get_mut(selector).and_then(Option::as_mut)
    }
}

/// The decoded state of both campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecodeState {
    /// Blocks indexed by campaign, then block index.
    pub blocks: [Vec<Block>; 2],
}

impl DecodeState {
    /// Create a state from the blocks of each campaign.
    pub fn new(campaign0: Vec<Block>, campaign1: Vec<Block>) -> Self {
        Self {
            blocks: [campaign0, campaign1],
        }
    }

    /// A state with the given number of empty blocks per campaign.
    pub fn with_block_counts(counts: [usize; 2]) -> Self {
        Self::new(vec![Block::new(); counts[0]], vec![Block::new(); counts[1]])
    }

    /// Look up a block by coordinate.
    pub fn block(&self, coord: BlockCoord) -> Result<&Block> {
        self.blocks
            .get(coord.campaign)
            .and_then(|blocks| blocks.get(coord.block))
            .ok_or(WorldError::MissingBlock(coord))
    }

    /// Mutable access to a block by coordinate.
    pub fn block_mut(&mut self, coord: BlockCoord) -> Result<&mut Block> {
        self.blocks
            .get_mut(coord.campaign)
            .and_then(|blocks| blocks.get_mut(coord.block))
            .ok_or(WorldError::MissingBlock(coord))
    }

    /// Mutable access to one transition slot.
    pub fn transition_mut(&mut self, coord: BlockCoord, selector: usize) -> Result<&mut Transition> {
        self.block_mut(coord)?
            .transition_mut(selector)
            .ok_or(WorldError::MissingTransition { coord, selector })
    }

    /// Total number of non-empty transition slots across both campaigns.
    pub fn transition_count(&self) -> usize {
        self.blocks
            .iter()
            .flatten()
            .map(|b| b.transitions.iter().flatten().count())
            .sum()
    }
}
