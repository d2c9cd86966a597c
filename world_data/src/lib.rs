//! # World Data
//!
//! The decoded world model shared by every transition tool. It names the
//! regular locations of both campaigns, maps block coordinates onto them, and
//! holds the decoded-state structure whose transition records the core reads
//! and rewrites in place.
//!
//! This crate does not decode or encode the underlying binary format.

pub mod decode;
pub mod error;
pub mod locations;

pub use decode::*;
pub use error::*;
pub use locations::*;
