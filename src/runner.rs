//! Single-match harness: drives one agent against the simulated arena for a
//! bounded number of ticks and reduces the run to serializable metrics.

use crate::agent::Agent;
use crate::geometry::Point;
use crate::sim::ArenaSim;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunMetrics {
    pub seed: u64,
    pub target_count: usize,
    pub max_ticks: u32,
    pub tick_count: u32,
    pub shots_fired: u64,
    pub targets_destroyed: u64,
    pub targets_remaining: usize,
    pub cleared: bool,
    pub host_calls: u64,
    pub distance_travelled: f64,
    pub final_x: f64,
    pub final_y: f64,
    pub final_mode: String,
    pub final_tracking: String,
}

/// Run one match to clearance or the tick limit, whichever comes first.
pub fn run_match(seed: u64, target_count: usize, max_ticks: u32) -> Result<RunMetrics> {
    if max_ticks == 0 {
        return Err(anyhow!("max_ticks must be > 0"));
    }

    let sim = ArenaSim::new(seed, target_count);
    let mut agent = Agent::new(sim, seed);

    let mut tick_count = 0u32;
    while tick_count < max_ticks && !agent.host().all_targets_down() {
        agent
            .tick()
            .with_context(|| format!("tick {tick_count} failed for seed={seed:#x}"))?;
        tick_count += 1;
    }

    let state = agent.state;
    let sim = agent.into_host();
    info!(
        seed,
        ticks = tick_count,
        destroyed = sim.targets_destroyed,
        cleared = sim.all_targets_down(),
        "match finished"
    );
    let Point { x, y } = state.position;
    Ok(RunMetrics {
        seed,
        target_count,
        max_ticks,
        tick_count,
        shots_fired: sim.shots_fired,
        targets_destroyed: sim.targets_destroyed,
        targets_remaining: sim.targets_alive(),
        cleared: sim.all_targets_down(),
        host_calls: sim.host_calls,
        distance_travelled: sim.distance_travelled,
        final_x: x,
        final_y: y,
        final_mode: state.mode.to_string(),
        final_tracking: state.scanner.tracking.to_string(),
    })
}

pub fn write_report(path: &Path, metrics: &RunMetrics) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    fs::write(
        path,
        serde_json::to_vec_pretty(metrics).context("failed to serialize run metrics")?,
    )
    .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}
