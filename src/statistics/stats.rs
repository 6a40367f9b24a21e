use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    operations: u64,
    bits_observed: u64,
    elapsed_micros: u64,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            operations: 0,
            bits_observed: 0,
            elapsed_micros: 0,
        }
    }

    /// Record into the statistics object that a batch of bitset operations was performed
    pub fn bump_operations(&mut self, amount: u64) {
        self.operations += amount
    }

    /// Record set bits seen by a workload (counts, successful tests). Keeps the
    /// measured work observable so it cannot be optimized away.
    pub fn bump_bits_observed(&mut self, amount: u64) {
        self.bits_observed += amount
    }

    /// Keeps the longest elapsed time, so merged per-thread stats report wall-clock time.
    pub fn record_elapsed(&mut self, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.elapsed_micros = self.elapsed_micros.max(micros)
    }

    pub fn get_operations(&self) -> u64 {
        self.operations
    }

    pub fn get_bits_observed(&self) -> u64 {
        self.bits_observed
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros)
    }

    /// Throughput over the recorded elapsed time, `0.0` if nothing was timed.
    pub fn ops_per_sec(&self) -> f64 {
        if self.elapsed_micros == 0 {
            return 0.0;
        }
        self.operations as f64 / self.get_elapsed().as_secs_f64()
    }

    pub fn merge(self, other: &Stats) -> Stats {
        Stats {
            operations: self.operations + other.operations,
            bits_observed: self.bits_observed + other.bits_observed,
            elapsed_micros: self.elapsed_micros.max(other.elapsed_micros),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
