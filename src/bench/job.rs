use std::{panic, thread, time::Instant};

use rand::distr::uniform::SampleUniform;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    bench::{Width, Workload, run_workload},
    bitset::Word,
    statistics::Stats,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BenchError {
    #[error("size {size} does not fit below the largest {width}-bit index")]
    SizeOutOfRange { size: u64, width: Width },

    #[error("the {workload} workload samples indices below its size, which must be non-zero")]
    EmptySize { workload: Workload },

    #[error("a benchmark job needs at least one thread")]
    NoThreads,
}

/// One point of a benchmark sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Job {
    pub width: Width,
    pub workload: Workload,
    pub size: u64,
    pub iterations: u64,
    pub threads: usize,
    pub seed: u64,
}

/// A finished job together with what it measured.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobReport {
    pub job: Job,
    pub stats: Stats,
    pub ops_per_sec: f64,
}

/// Share of `iterations` handed to thread `thread_id` out of `threads`.
fn iterations_for(iterations: u64, threads: usize, thread_id: usize) -> u64 {
    let threads = threads as u64;
    let thread_id = thread_id as u64;
    iterations / threads + u64::from(thread_id < iterations % threads)
}

fn run_sharded<W>(job: &Job) -> Result<Stats, BenchError>
where
    W: Word + SampleUniform + TryFrom<u64>,
{
    let size = <W as TryFrom<u64>>::try_from(job.size)
        .ok()
        .filter(|&size| size < W::MAX)
        .ok_or(BenchError::SizeOutOfRange {
            size: job.size,
            width: job.width,
        })?;
    if job.workload.samples_indices() && size == W::ZERO {
        return Err(BenchError::EmptySize {
            workload: job.workload,
        });
    }

    let start = Instant::now();
    // Every thread owns its bitset, nothing is shared.
    let mut combined = thread::scope(|scope| {
        let handles: Vec<_> = (0..job.threads)
            .map(|thread_id| {
                let iterations = iterations_for(job.iterations, job.threads, thread_id);
                let seed = job.seed.wrapping_add(thread_id as u64);
                scope.spawn(move || run_workload(job.workload, size, iterations, seed))
            })
            .collect();

        let mut combined = Stats::new();
        for handle in handles {
            let local = handle
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            combined = combined.merge(&local);
        }
        combined
    });

    combined.record_elapsed(start.elapsed());
    Ok(combined)
}

/// Runs `job` across its threads and reports the merged statistics.
pub fn run_job(job: &Job) -> Result<JobReport, BenchError> {
    if job.threads == 0 {
        return Err(BenchError::NoThreads);
    }
    debug!(?job, "starting benchmark job");

    let stats = match job.width {
        Width::W32 => run_sharded::<u32>(job)?,
        Width::W64 => run_sharded::<u64>(job)?,
    };

    debug!(
        operations = stats.get_operations(),
        bits_observed = stats.get_bits_observed(),
        "benchmark job done"
    );
    Ok(JobReport {
        job: *job,
        stats,
        ops_per_sec: stats.ops_per_sec(),
    })
}

/// Cartesian product of widths, workloads and sizes, sharing the remaining parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    pub widths: Vec<Width>,
    pub workloads: Vec<Workload>,
    pub sizes: Vec<u64>,
    pub iterations: u64,
    pub threads: usize,
    pub seed: u64,
}

impl Sweep {
    pub fn jobs(&self) -> Vec<Job> {
        let mut jobs =
            Vec::with_capacity(self.widths.len() * self.workloads.len() * self.sizes.len());
        for &width in &self.widths {
            for &workload in &self.workloads {
                for &size in &self.sizes {
                    jobs.push(Job {
                        width,
                        workload,
                        size,
                        iterations: self.iterations,
                        threads: self.threads,
                        seed: self.seed,
                    });
                }
            }
        }
        jobs
    }
}
