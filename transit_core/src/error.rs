//! Error types for the `transit_core` crate.
//!
//! Rewrite operations never fail; only building a collection, running the
//! fixup pre-pass, and parsing configuration or names can.

use world_data::{BlockCoord, WorldError};

/// Errors raised while preparing or building the transition graph.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// Block resolution, addressing, or name lookup failed.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A fixup target was expected to be relative but is not.
    #[error(
        "failed to convert transition to absolute: campaign={} block={} selector={selector}: transition not relative",
        .coord.campaign, .coord.block
    )]
    NotRelative { coord: BlockCoord, selector: usize },

    /// The collection configuration could not be parsed.
    #[error("invalid collect config: {0}")]
    Config(#[from] toml::de::Error),

    /// A list of operation descriptors could not be parsed.
    #[error("invalid transition op list: {0}")]
    OpList(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransitError>;
