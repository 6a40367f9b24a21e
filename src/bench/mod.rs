//! Benchmark workloads over both bitset widths.
//!
//! A [`Job`] fixes a width, a workload and a size; [`run_job`] shards its
//! iterations over threads that each own a private bitset and merges their
//! [`Stats`](crate::statistics::Stats). A [`Sweep`] expands into the cartesian
//! product of its parameter lists.

mod job;
mod workload;

pub use job::*;
pub use workload::*;
