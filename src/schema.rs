use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

/// Outcome of a single benchmark run.
///
/// `ops_per_second` is not guarded: a zero elapsed time yields `inf` (or `NaN`
/// for a zero count), and serde_json writes non-finite values as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub label: String,
    pub elapsed_secs: f64,
    pub operation_count: u64,
    pub ops_per_second: f64,
    pub memory_mb: f64,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "Execution time: {:.3} seconds", self.elapsed_secs)?;
        writeln!(f, "Operations: {}", self.operation_count)?;
        writeln!(f, "Performance: {:.2} OPS", self.ops_per_second)?;
        write!(f, "Memory used: {:.2} MB", self.memory_mb)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub run: RunMeta,
    pub reports: Vec<BenchmarkReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchmarkReport {
        BenchmarkReport {
            label: "Benchmark - Run Benchmark".to_string(),
            elapsed_secs: 1.23456,
            operation_count: 1_000,
            ops_per_second: 810.0051,
            memory_mb: 7629.39453125,
        }
    }

    #[test]
    fn text_rendering_matches_layout() {
        let text = sample().to_string();
        assert_eq!(
            text,
            "Benchmark - Run Benchmark\n\
             Execution time: 1.235 seconds\n\
             Operations: 1000\n\
             Performance: 810.01 OPS\n\
             Memory used: 7629.39 MB"
        );
    }

    #[test]
    fn degenerate_throughput_is_rendered_verbatim() {
        let mut r = sample();
        r.elapsed_secs = 0.0;
        r.ops_per_second = f64::INFINITY;
        assert!(r.to_string().contains("Performance: inf OPS"));

        r.operation_count = 0;
        r.ops_per_second = f64::NAN;
        assert!(r.to_string().contains("Performance: NaN OPS"));
    }

    #[test]
    fn json_field_names() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["label"], "Benchmark - Run Benchmark");
        assert_eq!(v["operation_count"], 1_000);
        assert!(v.get("elapsed_secs").is_some());
        assert!(v.get("ops_per_second").is_some());
        assert!(v.get("memory_mb").is_some());
    }

    #[test]
    fn non_finite_throughput_serializes_as_null() {
        let mut r = sample();
        r.ops_per_second = f64::INFINITY;
        let v = serde_json::to_value(&r).unwrap();
        assert!(v["ops_per_second"].is_null());
    }
}
