//! # VLSM Common
//!
//! Shared building blocks for the allocator workspace.
//!
//! * **[`network`]**: IPv4 models and the address arithmetic the engine is built on.
//! * **[`planning`]**: Port traits for collecting requests and writing reports.
//! * **[`config`]**: Runtime options passed down from the command line.
//! * **[`error`]**: The error type shared by every library crate.

pub mod config;
pub mod error;
pub mod network;
pub mod planning;
