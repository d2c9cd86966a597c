//! # Transit Core
//!
//! Builds the directed multigraph of travel transitions across both
//! campaigns and rewrites it. This crate reads the decoded state from
//! `world_data`, annotates every transition with its exact source and
//! destination, and swaps the content of connections in place.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Static location tables (depth tiers, sub-locations, exception lists)
//! - **collection**: Transition collector, filter policy, and the two-map graph store
//! - **trans_op**: Round-trip-preserving rewrite operations
//! - **fixup**: Pre-pass that makes known relative transitions absolute
//!
//! ## Data Flow
//!
//! decoded state → fixup → collector → [`Collection`] → [`exec_trans_op`] → decoded state (mutated)

pub mod collection;
pub mod config;
pub mod error;
pub mod fixup;
pub mod knowledge_base;
pub mod trans_op;

#[cfg(test)]
mod test_support;

pub use collection::*;
pub use config::*;
pub use error::*;
pub use fixup::*;
pub use knowledge_base::*;
pub use trans_op::*;
