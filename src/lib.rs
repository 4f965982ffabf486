//! Single-shot CPU workload benchmarks.
//!
//! [`harness::run_benchmark`] times one synchronous workload invocation and
//! returns a [`schema::BenchmarkReport`]; [`workloads::Workload`] is the fixed
//! catalog of six invocations and [`chart`] renders a report.

pub mod chart;
pub mod harness;
pub mod schema;
pub mod workloads;

pub use harness::run_benchmark;
pub use schema::BenchmarkReport;
pub use workloads::Workload;
