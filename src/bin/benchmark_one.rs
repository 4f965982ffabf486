use benchmark_one::chart;
use benchmark_one::schema::{BenchmarkReport, RunMeta, SuiteReport};
use benchmark_one::Workload;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human-readable report blocks.
    Text,
    /// JSON envelope with run metadata.
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one workload from the catalog.
    Run {
        #[arg(value_enum)]
        workload: Workload,
    },

    /// Run every workload in catalog order, one after another.
    Suite,

    /// Show the catalog: trigger name, label, size and operation count.
    List,
}

#[derive(Parser, Debug)]
#[command(name = "benchmark-one")]
#[command(about = "Single-shot CPU workload benchmarks")]
struct Args {
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Where to write the report. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Write an SVG chart of the last report to this path.
    #[arg(long, value_name = "FILE", global = true)]
    chart: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn now_utc() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

fn render(format: Format, reports: Vec<BenchmarkReport>) -> io::Result<String> {
    match format {
        Format::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")),
        Format::Json => {
            let suite = SuiteReport {
                run: RunMeta {
                    schema_version: 1,
                    bench_version: env!("CARGO_PKG_VERSION").to_string(),
                    timestamp_utc: now_utc(),
                    git_sha: git_sha_short(),
                },
                reports,
            };
            serde_json::to_string_pretty(&suite).map_err(io::Error::other)
        }
    }
}

/// Text reports going to stdout are shown as each run completes.
fn streams_text(args: &Args) -> bool {
    matches!(args.format, Format::Text) && args.out.is_none()
}

fn main() -> io::Result<()> {
    init_tracing();
    let args = Args::parse();

    let workloads: Vec<Workload> = match args.cmd {
        Command::Run { workload } => vec![workload],
        Command::Suite => Workload::ALL.to_vec(),
        Command::List => {
            for w in Workload::ALL {
                let name = w
                    .to_possible_value()
                    .map(|v| v.get_name().to_string())
                    .unwrap_or_default();
                println!(
                    "{:<9} {:<38} {:<22} ops={}",
                    name,
                    w.label(),
                    w.size(),
                    w.operation_count()
                );
            }
            return Ok(());
        }
    };

    let stream = streams_text(&args);

    let mut reports = Vec::with_capacity(workloads.len());
    for w in workloads {
        eprintln!("Running {} ({})...", w.label(), w.size());
        let report = w.run();
        if stream {
            if !reports.is_empty() {
                println!();
            }
            println!("{report}");
        }
        reports.push(report);
    }

    if let (Some(path), Some(last)) = (&args.chart, reports.last()) {
        chart::write_svg(path, last)?;
        tracing::info!(path = %path.display(), "chart written");
    }

    if stream {
        return Ok(());
    }

    let body = render(args.format, reports)?;
    if let Some(out) = args.out {
        fs::write(out, body)?;
    } else {
        println!("{body}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(label: &str) -> BenchmarkReport {
        BenchmarkReport {
            label: label.to_string(),
            elapsed_secs: 0.5,
            operation_count: 10,
            ops_per_second: 20.0,
            memory_mb: 7629.39453125,
        }
    }

    #[test]
    fn text_blocks_are_separated_by_a_blank_line() {
        let body = render(Format::Text, vec![report("a"), report("b")]).unwrap();
        assert_eq!(body, format!("{}\n\n{}", report("a"), report("b")));
    }

    #[test]
    fn json_envelope_carries_run_meta() {
        let body = render(Format::Json, vec![report("a")]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["run"]["schema_version"], 1);
        assert_eq!(v["reports"][0]["label"], "a");
    }

    #[test]
    fn stdout_text_streams_per_report() {
        let args = Args::parse_from(["benchmark-one", "suite"]);
        assert!(streams_text(&args));

        let args = Args::parse_from(["benchmark-one", "--out", "r.txt", "suite"]);
        assert!(!streams_text(&args));

        let args = Args::parse_from(["benchmark-one", "run", "pi", "--format", "json"]);
        assert!(!streams_text(&args));
        assert!(matches!(args.cmd, Command::Run { workload: Workload::Pi }));
    }
}
