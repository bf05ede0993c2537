//! Mode-driven destination selection plus the drive-to-point protocol.

use crate::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, BREAK_DISTANCE, CORNER_REGION, CRUISE_SPEED, MAX_ARRIVAL_SPEED,
    TRACK_DISTANCE,
};
use crate::geometry::{
    bearing, clamp_to_safe_region, corner_for_quadrant, distance, quadrant_of, Point,
};
use crate::host::HostLink;
use crate::state::{AgentMode, AgentState};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// One locomotion pass: pick the destination the current mode wants, feed it
/// through `go_to`, and handle the one-time opening transition. Returns true
/// when an arrival was confirmed this pass.
pub fn tick<H: HostLink, R: Rng>(host: &mut H, state: &mut AgentState, rng: &mut R) -> Result<bool> {
    let requested = choose_destination(state, rng);
    let arrived = go_to(host, state, requested, CRUISE_SPEED)?;
    if arrived && state.mode == AgentMode::Opening {
        // Fires exactly once: nothing ever sets Opening again.
        debug!(mode = %AgentMode::Avoid, "opening corner reached");
        state.mode = AgentMode::Avoid;
    }
    Ok(arrived)
}

fn choose_destination<R: Rng>(state: &mut AgentState, rng: &mut R) -> Point {
    match state.mode {
        AgentMode::Opening => corner_for_quadrant(quadrant_of(state.position)),
        AgentMode::Track => match state.scanner.target {
            // Close the gap while the estimate is far enough away; once in
            // melee range stop chasing and retreat to a corner instead.
            Some(target) if distance(state.position, target) > TRACK_DISTANCE => target,
            _ => evasive_destination(state, rng),
        },
        AgentMode::Avoid => evasive_destination(state, rng),
    }
}

/// Evasive repositioning target. Re-rolled only between commitments so a
/// maneuver in flight keeps its destination.
fn evasive_destination<R: Rng>(state: &AgentState, rng: &mut R) -> Point {
    if state.nav.driving {
        if let Some(current) = state.nav.current {
            return current;
        }
    }
    random_corner_point(rng)
}

/// A random point inside a random corner region of the arena.
pub fn random_corner_point<R: Rng>(rng: &mut R) -> Point {
    let x = if rng.gen_bool(0.5) {
        rng.gen_range(BREAK_DISTANCE..BREAK_DISTANCE + CORNER_REGION)
    } else {
        rng.gen_range(ARENA_WIDTH - BREAK_DISTANCE - CORNER_REGION..ARENA_WIDTH - BREAK_DISTANCE)
    };
    let y = if rng.gen_bool(0.5) {
        rng.gen_range(BREAK_DISTANCE..BREAK_DISTANCE + CORNER_REGION)
    } else {
        rng.gen_range(ARENA_HEIGHT - BREAK_DISTANCE - CORNER_REGION..ARENA_HEIGHT - BREAK_DISTANCE)
    };
    Point::new(x, y)
}

/// Drive-to-point protocol.
///
/// A requested destination that differs from the committed one is staged in
/// the single pending slot; the in-flight maneuver always completes first.
/// The committed destination is clamped into the safe region before use.
/// Arrival is only declared once the unit is both inside `BREAK_DISTANCE`
/// of the safe destination and slow enough not to overshoot; until then a
/// stop command is issued instead.
pub fn go_to<H: HostLink>(
    host: &mut H,
    state: &mut AgentState,
    requested: Point,
    speed: f64,
) -> Result<bool> {
    let committed = match state.nav.current {
        Some(current) => {
            if current != requested {
                state.nav.next = Some(requested);
            }
            current
        }
        None => {
            state.nav.current = Some(requested);
            requested
        }
    };
    state.nav.driving = true;

    let safe = clamp_to_safe_region(committed);
    state.nav.safe = Some(safe);
    let remaining = distance(state.position, safe);

    if remaining > BREAK_DISTANCE {
        host.drive(bearing(state.position, safe), speed)?;
        Ok(false)
    } else if state.speed > MAX_ARRIVAL_SPEED {
        // Overshoot guard: close enough, but still moving too fast.
        host.drive(bearing(state.position, safe), 0.0)?;
        Ok(false)
    } else {
        debug!(x = safe.x, y = safe.y, "destination reached");
        state.nav.driving = false;
        state.nav.current = state.nav.next.take();
        Ok(true)
    }
}
