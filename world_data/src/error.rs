//! Error types for the `world_data` crate.

use crate::{BlockCoord, LocationCode};

/// Errors raised while resolving locations or addressing decoded blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The coordinate does not name a known block.
    #[error("invalid block coordinate: campaign={} block={}", .0.campaign, .0.block)]
    InvalidBlock(BlockCoord),

    /// The decoded state has no such block.
    #[error("block not present in decoded state: campaign={} block={}", .0.campaign, .0.block)]
    MissingBlock(BlockCoord),

    /// The block has no transition in the given slot.
    #[error("no transition at campaign={} block={} selector={selector}", .coord.campaign, .coord.block)]
    MissingTransition { coord: BlockCoord, selector: usize },

    /// No location carries the given name.
    #[error("unknown location: {0:?}")]
    UnknownLocationName(String),

    /// No location carries the given code.
    #[error("unknown location code: {0}")]
    UnknownLocationCode(LocationCode),
}

pub type Result<T> = std::result::Result<T, WorldError>;
