//! CPU-bound workloads and the fixed catalog of benchmark invocations.

use std::hint::black_box;

use clap::ValueEnum;

use crate::harness::{run_benchmark, FIXED_ARRAY_SIZE};
use crate::schema::BenchmarkReport;

pub mod arithmetic;
pub mod matrix;
pub mod pi;
pub mod sieve;

pub use arithmetic::{accumulate, complex_level_1, complex_level_2};
pub use matrix::{matrix_multiplication, multiply, Matrix};
pub use pi::{calculate_pi, leibniz_partial_sum};
pub use sieve::eratosthenes;

/// Number of Leibniz terms summed by the Pi trigger.
pub const PI_TERMS: usize = 500_000;

/// Side length of the square matrices multiplied by the matrix trigger.
pub const MATRIX_SIZE: usize = 2_000;

/// One of the six fixed benchmark triggers.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Workload {
    /// Floating-point accumulation: sqrt(i) * i^2.
    Basic,
    /// i^2 - sqrt(i) * sin(i).
    #[value(name = "complex1")]
    ComplexLevel1,
    /// i^3 * ln(i + 1) - sin(i).
    #[value(name = "complex2")]
    ComplexLevel2,
    /// Sieve of Eratosthenes up to the fixed array size.
    Sieve,
    /// Leibniz series for Pi, printed with one digit per term.
    Pi,
    /// Naive multiplication of two all-ones square matrices.
    Matrix,
}

impl Workload {
    pub const ALL: [Workload; 6] = [
        Workload::Basic,
        Workload::ComplexLevel1,
        Workload::ComplexLevel2,
        Workload::Sieve,
        Workload::Pi,
        Workload::Matrix,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Workload::Basic => "Benchmark - Run Benchmark",
            Workload::ComplexLevel1 => "Benchmark - Complex Nivel 1",
            Workload::ComplexLevel2 => "Benchmark - Complex Nivel 2",
            Workload::Sieve => "Benchmark - Ciurul lui Eratostene",
            Workload::Pi => "Benchmark - Zecimalele lui Pi",
            Workload::Matrix => "Benchmark - Multiplicarea Matricelor",
        }
    }

    /// Human-readable size of the fixed invocation, as shown by `list`.
    pub fn size(&self) -> String {
        match self {
            Workload::Basic | Workload::ComplexLevel1 | Workload::ComplexLevel2 => {
                format!("n = {FIXED_ARRAY_SIZE}")
            }
            Workload::Sieve => format!("upper bound = {FIXED_ARRAY_SIZE}"),
            Workload::Pi => format!("terms = {PI_TERMS}"),
            Workload::Matrix => format!("{MATRIX_SIZE}x{MATRIX_SIZE}"),
        }
    }

    /// Operation count fed to the throughput divisor.
    ///
    /// Pi reports the fixed array size rather than its term count, so its
    /// OPS figure does not describe the work done.
    pub fn operation_count(&self) -> u64 {
        match self {
            Workload::Matrix => (MATRIX_SIZE as u64).pow(3),
            _ => FIXED_ARRAY_SIZE,
        }
    }

    /// Size argument of the fixed invocation.
    pub fn catalog_size(&self) -> u32 {
        match self {
            // 1e9 fits in u32.
            Workload::Basic
            | Workload::ComplexLevel1
            | Workload::ComplexLevel2
            | Workload::Sieve => FIXED_ARRAY_SIZE as u32,
            Workload::Pi => PI_TERMS as u32,
            Workload::Matrix => MATRIX_SIZE as u32,
        }
    }

    /// Runs the fixed invocation once, blocking the calling thread.
    pub fn run(self) -> BenchmarkReport {
        self.run_with_size(self.catalog_size())
    }

    /// Runs the workload at `size` under the catalog label and operation count.
    pub(crate) fn run_with_size(self, size: u32) -> BenchmarkReport {
        let ops = self.operation_count();
        let label = self.label();
        match self {
            Workload::Basic => run_benchmark(label, || accumulate(black_box(u64::from(size))), ops),
            Workload::ComplexLevel1 => {
                run_benchmark(label, || complex_level_1(black_box(u64::from(size))), ops)
            }
            Workload::ComplexLevel2 => {
                run_benchmark(label, || complex_level_2(black_box(u64::from(size))), ops)
            }
            Workload::Sieve => run_benchmark(label, || eratosthenes(black_box(size)), ops),
            Workload::Pi => run_benchmark(label, || calculate_pi(black_box(size as usize)), ops),
            Workload::Matrix => {
                run_benchmark(label, || matrix_multiplication(black_box(size as usize)), ops)
            }
        }
    }
}
