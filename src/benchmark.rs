//! Multi-seed benchmark: fans matches out across a rayon pool and writes an
//! aggregate summary plus per-run records to disk.

use crate::runner::{self, RunMetrics};
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRecord {
    pub seed: u64,
    pub seed_hex: String,
    pub tick_count: u32,
    pub shots_fired: u64,
    pub targets_destroyed: u64,
    pub cleared: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub generated_unix_s: u64,
    pub target_count: usize,
    pub max_ticks: u32,
    pub seed_count: usize,
    pub clear_rate: f64,
    pub avg_ticks: f64,
    pub avg_shots: f64,
    pub avg_destroyed: f64,
    pub shot_efficiency: f64,
    pub runs: Vec<RunRecord>,
}

pub struct BenchmarkConfig {
    pub seeds: Vec<u64>,
    pub target_count: usize,
    pub max_ticks: u32,
    pub out_dir: PathBuf,
    pub jobs: Option<usize>,
}

pub fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkReport> {
    if config.seeds.is_empty() {
        return Err(anyhow!("benchmark requires at least one seed"));
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed creating {}", config.out_dir.display()))?;

    let run_one = |seed: &u64| -> Result<RunMetrics> {
        runner::run_match(*seed, config.target_count, config.max_ticks)
            .with_context(|| format!("benchmark run failed for seed={seed:#x}"))
    };

    let run_results: Vec<Result<RunMetrics>> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| config.seeds.par_iter().map(run_one).collect())
    } else {
        config.seeds.par_iter().map(run_one).collect()
    };

    let mut runs = Vec::with_capacity(run_results.len());
    for result in run_results {
        runs.push(result?);
    }

    let total_runs = runs.len();
    let cleared = runs.iter().filter(|r| r.cleared).count();
    let sum_ticks: u64 = runs.iter().map(|r| r.tick_count as u64).sum();
    let sum_shots: u64 = runs.iter().map(|r| r.shots_fired).sum();
    let sum_destroyed: u64 = runs.iter().map(|r| r.targets_destroyed).sum();

    let mut run_records: Vec<RunRecord> = runs
        .iter()
        .map(|r| RunRecord {
            seed: r.seed,
            seed_hex: format!("{:#018x}", r.seed),
            tick_count: r.tick_count,
            shots_fired: r.shots_fired,
            targets_destroyed: r.targets_destroyed,
            cleared: r.cleared,
        })
        .collect();
    // Best runs first: cleared, then fewest ticks.
    run_records.sort_by(|a, b| {
        b.cleared
            .cmp(&a.cleared)
            .then(a.tick_count.cmp(&b.tick_count))
    });

    let report = BenchmarkReport {
        generated_unix_s: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        target_count: config.target_count,
        max_ticks: config.max_ticks,
        seed_count: total_runs,
        clear_rate: cleared as f64 / total_runs as f64,
        avg_ticks: sum_ticks as f64 / total_runs as f64,
        avg_shots: sum_shots as f64 / total_runs as f64,
        avg_destroyed: sum_destroyed as f64 / total_runs as f64,
        shot_efficiency: if sum_shots > 0 {
            sum_destroyed as f64 / sum_shots as f64
        } else {
            0.0
        },
        runs: run_records,
    };

    let report_path = config.out_dir.join("summary.json");
    fs::write(
        &report_path,
        serde_json::to_vec_pretty(&report).context("failed to serialize summary")?,
    )
    .with_context(|| format!("failed writing {}", report_path.display()))?;

    Ok(report)
}
