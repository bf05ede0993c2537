//! Gated fire control.
//!
//! Weapons never decide what to shoot at; they mirror the scanner's current
//! estimate and fire only when every gate holds. Dispersion is tied to the
//! scanner's last cone width, so shots tighten as tracking confidence rises.

use crate::constants::{MAX_FIRE_DISTANCE, SAFE_SHOOT_DISTANCE};
use crate::geometry::{bearing, distance, in_arena};
use crate::host::HostLink;
use crate::state::{AgentMode, AgentState};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// One fire-control pass. Returns true when a shot was issued.
pub fn tick<H: HostLink, R: Rng>(host: &mut H, state: &mut AgentState, rng: &mut R) -> Result<bool> {
    state.weapons.target = state.scanner.target;

    if state.mode != AgentMode::Track {
        return Ok(false);
    }
    let Some(target) = state.weapons.target else {
        return Ok(false);
    };
    let dist = distance(state.position, target);
    if dist > MAX_FIRE_DISTANCE || !in_arena(target) {
        return Ok(false);
    }

    // Aim error proportional to scanner uncertainty: up to half the last
    // cone width to either side.
    let half = state.scanner.variation / 2.0;
    let jitter = if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    };
    let heading = bearing(state.position, target) + jitter;
    let power = dist.max(SAFE_SHOOT_DISTANCE);

    debug!(heading, power, dist, "firing");
    host.shoot(heading, power)?;
    state.weapons.flying += 1;
    Ok(true)
}
