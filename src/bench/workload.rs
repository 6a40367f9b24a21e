use std::{fmt, hint::black_box, time::Instant};

use clap::ValueEnum;
use rand::{Rng, SeedableRng, distr::uniform::SampleUniform, rngs::StdRng};
use serde::Serialize;

use crate::{
    bitset::{Bitset, Word},
    statistics::Stats,
};

/// Index width of the bitset under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum Width {
    #[value(name = "32")]
    #[serde(rename = "32")]
    W32,
    #[value(name = "64")]
    #[serde(rename = "64")]
    W64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workload {
    /// Random `set` on a set of `size` bits
    Set,
    /// Random `test` on a third-populated set of `size` bits
    Test,
    /// `set(size)` on a fresh empty set, growing it every time
    SetExpand,
    /// Union, intersection, difference, symmetric difference and complement
    /// of two random sets of differing lengths
    Algebra,
}

impl Workload {
    /// Bitset operations performed per iteration.
    pub fn operations_per_iteration(self) -> u64 {
        match self {
            Workload::Algebra => 5,
            _ => 1,
        }
    }

    /// Whether the workload samples indices in `[0, size)`, which must not be empty.
    pub fn samples_indices(self) -> bool {
        !matches!(self, Workload::SetExpand)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Workload::Set => "set",
            Workload::Test => "test",
            Workload::SetExpand => "set-expand",
            Workload::Algebra => "algebra",
        };
        f.write_str(name)
    }
}

/// A bitset of `len` bits with roughly a third of them set at random.
fn random_bitset<W>(rng: &mut StdRng, len: W) -> Bitset<W>
where
    W: Word + SampleUniform,
{
    let mut bs = Bitset::new(len);
    for _ in 0..len.to_u64() / 3 {
        bs.set(rng.random_range(W::ZERO..len));
    }
    bs
}

/// Runs `iterations` rounds of `workload` on a single thread.
///
/// `size` must be non-zero for workloads that sample indices, and below
/// `W::MAX` for all of them. Both are checked by the job layer.
pub fn run_workload<W>(workload: Workload, size: W, iterations: u64, seed: u64) -> Stats
where
    W: Word + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = Stats::new();
    let start = Instant::now();

    match workload {
        Workload::Set => {
            let mut bs = Bitset::new(size);
            for _ in 0..iterations {
                bs.set(rng.random_range(W::ZERO..size));
            }
            stats.bump_bits_observed(bs.count().to_u64());
        }
        Workload::Test => {
            let bs = random_bitset(&mut rng, size);
            let mut hits = 0;
            for _ in 0..iterations {
                hits += black_box(bs.test(rng.random_range(W::ZERO..size))) as u64;
            }
            stats.bump_bits_observed(hits);
        }
        Workload::SetExpand => {
            for _ in 0..iterations {
                let mut bs = Bitset::new(W::ZERO);
                bs.set(size);
                stats.bump_bits_observed(black_box(bs).count().to_u64());
            }
        }
        Workload::Algebra => {
            let a = random_bitset(&mut rng, size);
            let b = random_bitset(&mut rng, (size >> 1) + W::ONE);
            for _ in 0..iterations {
                let observed = [
                    a.union(&b).count(),
                    a.intersection(&b).count(),
                    a.difference(&b).count(),
                    a.symmetric_difference(&b).count(),
                    a.complement().count(),
                ];
                let total: u64 = black_box(observed).iter().map(|c| c.to_u64()).sum();
                stats.bump_bits_observed(total);
            }
        }
    }

    stats.bump_operations(iterations * workload.operations_per_iteration());
    stats.record_elapsed(start.elapsed());
    stats
}
