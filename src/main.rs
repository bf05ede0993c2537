use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tank_autopilot::benchmark::{run_benchmark, BenchmarkConfig};
use tank_autopilot::runner::{run_match, write_report};
use tank_autopilot::util::{parse_seed, parse_seed_csv, seed_sequence, seed_to_hex};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tank-autopilot")]
#[command(about = "Tactical tank controller lab: simulated matches and multi-seed benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single simulated match
    Run {
        #[arg(long, default_value = "0xA57E0001")]
        seed: String,
        #[arg(long, default_value_t = 4)]
        targets: usize,
        #[arg(long, default_value_t = 5_000)]
        max_ticks: u32,
        /// Write the run metrics JSON here instead of stdout-only
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run a multi-seed benchmark
    Benchmark {
        /// Explicit comma-separated seed list; overrides --seed-start
        #[arg(long)]
        seeds: Option<String>,
        #[arg(long)]
        seed_start: Option<String>,
        #[arg(long, default_value_t = 12)]
        seed_count: u32,
        #[arg(long, default_value_t = 4)]
        targets: usize,
        #[arg(long, default_value_t = 5_000)]
        max_ticks: u32,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        jobs: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Run {
            seed,
            targets,
            max_ticks,
            output,
        } => {
            let seed = parse_seed(&seed)?;
            let metrics = run_match(seed, targets, max_ticks)?;
            if let Some(path) = &output {
                write_report(path, &metrics)?;
            }

            println!("seed={}", seed_to_hex(metrics.seed));
            println!("ticks={}", metrics.tick_count);
            println!("shots_fired={}", metrics.shots_fired);
            println!("targets_destroyed={}", metrics.targets_destroyed);
            println!("targets_remaining={}", metrics.targets_remaining);
            println!("cleared={}", metrics.cleared);
            println!("host_calls={}", metrics.host_calls);
            println!("distance_travelled={:.1}", metrics.distance_travelled);
            println!("final_mode={}", metrics.final_mode);
            println!("final_tracking={}", metrics.final_tracking);
            if let Some(path) = output {
                println!("output={}", path.display());
            }
        }
        Commands::Benchmark {
            seeds,
            seed_start,
            seed_count,
            targets,
            max_ticks,
            out_dir,
            jobs,
        } => {
            let seeds = resolve_seeds(seeds.as_deref(), seed_start.as_deref(), seed_count)?;
            let out_dir =
                out_dir.unwrap_or_else(|| PathBuf::from(format!("benchmarks/{}", timestamp_suffix())));

            let report = run_benchmark(BenchmarkConfig {
                seeds,
                target_count: targets,
                max_ticks,
                out_dir: out_dir.clone(),
                jobs,
            })?;

            println!("runs={}", report.seed_count);
            println!("clear_rate={:.0}%", report.clear_rate * 100.0);
            println!("avg_ticks={:.1}", report.avg_ticks);
            println!("avg_shots={:.1}", report.avg_shots);
            println!("avg_destroyed={:.2}", report.avg_destroyed);
            println!("shot_efficiency={:.2}%", report.shot_efficiency * 100.0);
            println!("out_dir={}", out_dir.display());
            println!("top runs:");
            for (idx, run) in report.runs.iter().take(5).enumerate() {
                println!(
                    "  {}. {} ticks={} shots={} destroyed={} cleared={}",
                    idx + 1,
                    run.seed_hex,
                    run.tick_count,
                    run.shots_fired,
                    run.targets_destroyed,
                    run.cleared,
                );
            }
        }
    }

    Ok(())
}

fn resolve_seeds(seeds: Option<&str>, seed_start: Option<&str>, seed_count: u32) -> Result<Vec<u64>> {
    if let Some(csv) = seeds {
        return parse_seed_csv(csv);
    }
    let start = if let Some(start) = seed_start {
        parse_seed(start)?
    } else {
        0xA57E_0001
    };
    Ok(seed_sequence(start, seed_count as usize))
}

fn timestamp_suffix() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{now}")
}
