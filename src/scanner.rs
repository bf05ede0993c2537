//! Target acquisition: broad-area exploration and the five-level tracking
//! confidence machine.
//!
//! Every invocation performs exactly one sensor sweep. The tracking states
//! are nested: each state sweeps a span equal to the cone width of its
//! coarser predecessor, so a hit at any level mathematically places the
//! target inside the next finer level's span. A miss falls back exactly one
//! confidence level; re-acquisition never restarts from scratch.

use crate::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, EXPLORE_RADIUS_MAX, EXPLORE_RADIUS_MIN, LOCATE_SCAN_CONE,
    SCAN_RESOLUTION_HIGH, SCAN_RESOLUTION_LOW, SCAN_RESOLUTION_MAX, SEARCH_AREA_RADIUS,
};
use crate::geometry::{bearing, distance, project, Point};
use crate::host::HostLink;
use crate::state::{AgentMode, AgentState, SearchArea, Tracking};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// One scanner pass: tracking sub-machine while in TRACK mode, broad
/// exploration otherwise.
pub fn tick<H: HostLink, R: Rng>(host: &mut H, state: &mut AgentState, rng: &mut R) -> Result<()> {
    if state.mode == AgentMode::Track {
        track_step(host, state, rng)
    } else {
        explore_step(host, state, rng)
    }
}

// ── Area sweeps ─────────────────────────────────────────────────────

enum SweepOutcome {
    Hit(Point),
    Searching,
    Exhausted,
}

/// Apparent angular diameter of a circular area, in degrees. Floored at the
/// finest cone width so the progress step below stays finite.
fn apparent_span(dist: f64, radius: f64) -> f64 {
    let ratio = (radius / dist.max(1.0)).clamp(0.0, 1.0);
    (2.0 * ratio.asin()).to_degrees().max(SCAN_RESOLUTION_MAX)
}

/// Sweep one cone-width chunk of the current search area. Closer or larger
/// areas subtend a wider span and therefore take more ticks to cover.
fn area_sweep<H: HostLink>(host: &mut H, state: &mut AgentState) -> Result<SweepOutcome> {
    let Some(area) = state.scanner.area else {
        return Ok(SweepOutcome::Exhausted);
    };
    let span = apparent_span(distance(state.position, area.center), area.radius);
    let cone = SCAN_RESOLUTION_LOW;
    let heading = bearing(state.position, area.center) + (state.scanner.progress - 0.5) * span;

    state.scanner.variation = cone;
    let range = host.scan(heading, cone)?;
    if range > 0.0 {
        return Ok(SweepOutcome::Hit(project(state.position, heading, range)));
    }

    state.scanner.progress += (cone / span).min(1.0);
    if state.scanner.progress >= 1.0 {
        Ok(SweepOutcome::Exhausted)
    } else {
        Ok(SweepOutcome::Searching)
    }
}

// ── Exploration ─────────────────────────────────────────────────────

fn explore_step<H: HostLink, R: Rng>(
    host: &mut H,
    state: &mut AgentState,
    rng: &mut R,
) -> Result<()> {
    if !state.scanner.scanning {
        let area = SearchArea {
            center: Point::new(
                rng.gen_range(0.0..ARENA_WIDTH),
                rng.gen_range(0.0..ARENA_HEIGHT),
            ),
            radius: rng.gen_range(EXPLORE_RADIUS_MIN..=EXPLORE_RADIUS_MAX),
        };
        debug!(
            x = area.center.x,
            y = area.center.y,
            radius = area.radius,
            "new explore area"
        );
        state.scanner.area = Some(area);
        state.scanner.scanning = true;
        state.scanner.progress = 0.0;
    }

    match area_sweep(host, state)? {
        SweepOutcome::Hit(contact) => {
            debug!(x = contact.x, y = contact.y, "contact acquired");
            state.scanner.target = Some(contact);
            state.scanner.tracking = Tracking::Never;
            state.scanner.progress = 0.0;
            state.scanner.scanning = false;
            state.mode = AgentMode::Track;
        }
        SweepOutcome::Exhausted => {
            // Nothing here; a fresh random area is picked next cycle.
            state.scanner.scanning = false;
        }
        SweepOutcome::Searching => {}
    }
    Ok(())
}

// ── Tracking sub-machine ────────────────────────────────────────────

/// What exhausting a sweep without a hit leads to.
#[derive(Clone, Copy)]
enum Exhaust {
    Demote(Tracking),
    SeedSearch,
}

#[derive(Clone, Copy)]
struct SweepRow {
    cone: f64,
    span: f64,
    on_hit: Tracking,
    on_exhaust: Exhaust,
}

/// The cone-sweep rows of the transition table. NEVER (direct ping) and
/// SEARCH (area sweep) do not sweep a fixed cone and are handled apart.
fn sweep_row(tracking: Tracking) -> Option<SweepRow> {
    match tracking {
        Tracking::Locate => Some(SweepRow {
            cone: SCAN_RESOLUTION_LOW,
            span: LOCATE_SCAN_CONE,
            on_hit: Tracking::Pinpoint,
            on_exhaust: Exhaust::SeedSearch,
        }),
        Tracking::Pinpoint => Some(SweepRow {
            cone: SCAN_RESOLUTION_HIGH,
            span: SCAN_RESOLUTION_LOW,
            on_hit: Tracking::Found,
            on_exhaust: Exhaust::Demote(Tracking::Locate),
        }),
        Tracking::Found => Some(SweepRow {
            cone: SCAN_RESOLUTION_MAX,
            span: SCAN_RESOLUTION_HIGH,
            on_hit: Tracking::Found,
            on_exhaust: Exhaust::Demote(Tracking::Locate),
        }),
        Tracking::Never | Tracking::Search => None,
    }
}

fn transition(state: &mut AgentState, next: Tracking) {
    if state.scanner.tracking != next {
        debug!(from = %state.scanner.tracking, to = %next, "tracking transition");
    }
    state.scanner.tracking = next;
    state.scanner.progress = 0.0;
}

fn track_step<H: HostLink, R: Rng>(
    host: &mut H,
    state: &mut AgentState,
    rng: &mut R,
) -> Result<()> {
    let Some(target) = state.scanner.target else {
        // TRACK without an estimate: nothing to refine, explore instead.
        return explore_step(host, state, rng);
    };

    match state.scanner.tracking {
        Tracking::Never => {
            // Direct ping at the seeded estimate, no sweep.
            let heading = bearing(state.position, target);
            state.scanner.variation = SCAN_RESOLUTION_HIGH;
            let range = host.scan(heading, SCAN_RESOLUTION_HIGH)?;
            if range > 0.0 {
                state.scanner.target = Some(project(state.position, heading, range));
                state.scanner.progress = 0.0;
            } else {
                transition(state, Tracking::Locate);
            }
        }
        Tracking::Search => match area_sweep(host, state)? {
            SweepOutcome::Hit(contact) => {
                state.scanner.target = Some(contact);
                transition(state, Tracking::Pinpoint);
            }
            SweepOutcome::Exhausted => {
                // Lock abandoned: back to evasion until something new shows.
                debug!("search area exhausted, abandoning lock");
                state.mode = AgentMode::Avoid;
                state.scanner.scanning = false;
                transition(state, Tracking::Never);
            }
            SweepOutcome::Searching => {}
        },
        current => {
            if let Some(row) = sweep_row(current) {
                let heading =
                    bearing(state.position, target) + (state.scanner.progress - 0.5) * row.span;
                state.scanner.variation = row.cone;
                let range = host.scan(heading, row.cone)?;
                if range > 0.0 {
                    state.scanner.target = Some(project(state.position, heading, range));
                    transition(state, row.on_hit);
                } else {
                    state.scanner.progress += row.cone / row.span;
                    if state.scanner.progress >= 1.0 {
                        match row.on_exhaust {
                            Exhaust::Demote(next) => transition(state, next),
                            Exhaust::SeedSearch => {
                                state.scanner.area = Some(SearchArea {
                                    center: target,
                                    radius: SEARCH_AREA_RADIUS,
                                });
                                transition(state, Tracking::Search);
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_nest_inside_their_predecessor_cone() {
        // A hit during LOCATE bounds the target within one LOW cone, which
        // is exactly the PINPOINT span, and so on down the table.
        let locate = sweep_row(Tracking::Locate).unwrap();
        let pinpoint = sweep_row(Tracking::Pinpoint).unwrap();
        let found = sweep_row(Tracking::Found).unwrap();
        assert!(locate.span >= locate.cone);
        assert_eq!(pinpoint.span, locate.cone);
        assert_eq!(found.span, pinpoint.cone);
    }

    #[test]
    fn apparent_span_grows_as_range_closes() {
        let far = apparent_span(500.0, 50.0);
        let near = apparent_span(100.0, 50.0);
        assert!(near > far);
        // Inside the area the span degenerates to a half circle.
        assert!((apparent_span(10.0, 50.0) - 180.0).abs() < 1e-9);
    }
}
