//! # VLSM Core
//!
//! The allocation engine and the service that drives it.
//!
//! * [`sizing`]: host counts to power-of-two blocks.
//! * [`ordering`]: largest-first request ordering.
//! * [`allocator`]: the greedy allocation loop.
//! * [`planner`]: collector -> engine -> writers.

pub mod allocator;
pub mod ordering;
pub mod planner;
pub mod sizing;
