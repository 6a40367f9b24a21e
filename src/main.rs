use anyhow::Context;
use bitset::bench::{JobReport, Sweep, Width, Workload, run_job};
use clap::Parser;
use std::{fs::File, io::BufWriter, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Benchmark driver for the growable bitsets
#[derive(Parser, Debug)]
#[command(name = "bitset-bench")]
#[command(about = "Measures bitset operations across widths, workloads and sizes", long_about = None)]
struct Args {
    /// Index widths to measure (comma-separated list, e.g., "32,64")
    #[arg(short, long, value_delimiter = ',', default_values = ["32", "64"])]
    widths: Vec<Width>,

    /// Workloads to run (comma-separated list, e.g., "set,test,set-expand,algebra")
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["set", "test", "set-expand", "algebra"]
    )]
    workloads: Vec<Workload>,

    /// Bitset sizes in bits (comma-separated list, e.g., "1000,100000")
    #[arg(short, long, value_delimiter = ',', default_values = ["100000"])]
    sizes: Vec<u64>,

    /// Iterations per job, shared among the threads
    #[arg(short, long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Number of threads per job, each owning its own bitset
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Seed for the random index generators
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write every job report as JSON to this path
    #[arg(short, long)]
    report: Option<PathBuf>,
}

fn print_report(report: &JobReport) {
    println!(
        "width={:>2} workload={:<10} size={:<10} {} ops in {:.3}s ({:.2} ops/s, {} bits observed)",
        report.job.width,
        report.job.workload,
        report.job.size,
        report.stats.get_operations(),
        report.stats.get_elapsed().as_secs_f64(),
        report.ops_per_sec,
        report.stats.get_bits_observed(),
    );
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let sweep = Sweep {
        widths: args.widths,
        workloads: args.workloads,
        sizes: args.sizes,
        iterations: args.iterations,
        threads: args.threads,
        seed: args.seed,
    };
    let jobs = sweep.jobs();

    info!(
        jobs = jobs.len(),
        iterations = sweep.iterations,
        threads = sweep.threads,
        "starting benchmark sweep"
    );

    let mut reports = Vec::with_capacity(jobs.len());
    for job in tqdm::tqdm(jobs.iter()) {
        let report = run_job(job).with_context(|| {
            format!(
                "{} workload on {} bits ({}-bit)",
                job.workload, job.size, job.width
            )
        })?;
        print_report(&report);
        reports.push(report);
    }

    if let Some(path) = args.report {
        let file = File::create(&path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &reports)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    info!("all jobs completed");
    Ok(())
}
