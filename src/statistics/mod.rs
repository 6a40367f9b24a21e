//! Performance statistics tracking for bitset benchmark workloads.
//!
//! This module provides a structure for collecting and aggregating metrics about
//! benchmark runs: operations performed, set bits observed and elapsed time.

mod stats;
pub use stats::*;
