use clap::Parser;
use ripple_core::{run_benchmark, BenchmarkConfig, Bounds, KernelBackend};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Full versus partial ripple update benchmark
#[derive(Parser, Debug)]
#[command(name = "ripple-bench")]
#[command(about = "Times full-grid and partial-grid ripple stencil passes", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Grid edge length in cells
    #[arg(short, long, default_value_t = 325)]
    size: usize,

    /// Passes per mode
    #[arg(short, long, default_value_t = 20)]
    runs: u32,

    /// Partial region first row (inclusive)
    #[arg(long, default_value_t = 100)]
    start_x: i64,

    /// Partial region last row (exclusive)
    #[arg(long, default_value_t = 150)]
    end_x: i64,

    /// Partial region first column (inclusive)
    #[arg(long, default_value_t = 100)]
    start_y: i64,

    /// Partial region last column (exclusive)
    #[arg(long, default_value_t = 150)]
    end_y: i64,

    /// Seed shared by both modes (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Split each pass by rows across all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print the full report as JSON instead of one line
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            size: self.size,
            runs: self.runs,
            region: Bounds::new(self.start_x, self.end_x, self.start_y, self.end_y),
            seed: self.seed,
            backend: if self.parallel {
                KernelBackend::Parallel
            } else {
                KernelBackend::Serial
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let report = match run_benchmark(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Benchmark failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_config() {
        let args = Args::parse_from(["ripple-bench"]);
        assert_eq!(args.to_config(), BenchmarkConfig::default());
    }

    #[test]
    fn test_negative_bounds_and_parallel() {
        let args = Args::parse_from([
            "ripple-bench",
            "--start-x",
            "-5",
            "--end-x",
            "400",
            "--parallel",
            "--seed",
            "9",
        ]);
        let config = args.to_config();
        assert_eq!(config.region, Bounds::new(-5, 400, 100, 150));
        assert_eq!(config.backend, KernelBackend::Parallel);
        assert_eq!(config.seed, Some(9));
    }
}
