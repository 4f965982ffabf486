use std::hint::black_box;
use std::mem::size_of;
use std::time::Instant;

use tracing::{debug, info};

use crate::schema::BenchmarkReport;

/// Array size the catalog workloads are dimensioned by.
///
/// The memory estimate is derived from this constant alone, whatever the
/// workload actually allocates.
pub const FIXED_ARRAY_SIZE: u64 = 1_000_000_000;

/// Memory figure attached to every report: `FIXED_ARRAY_SIZE` 64-bit integers, in MiB.
pub fn memory_estimate_mb() -> f64 {
    (FIXED_ARRAY_SIZE * size_of::<i64>() as u64) as f64 / (1024.0 * 1024.0)
}

/// Times one synchronous invocation of `workload` and derives the report figures.
///
/// `operation_count` is taken on trust and only used as the throughput
/// numerator. The workload's return value is discarded.
pub fn run_benchmark<T>(
    label: &str,
    workload: impl FnOnce() -> T,
    operation_count: u64,
) -> BenchmarkReport {
    debug!(label, operation_count, "starting workload");

    let start = Instant::now();
    black_box(workload());
    let elapsed_secs = start.elapsed().as_secs_f64();

    let ops_per_second = operation_count as f64 / elapsed_secs;
    let memory_mb = memory_estimate_mb();

    info!(label, elapsed_secs, ops_per_second, memory_mb, "workload finished");

    BenchmarkReport {
        label: label.to_string(),
        elapsed_secs,
        operation_count,
        ops_per_second,
        memory_mb,
    }
}
