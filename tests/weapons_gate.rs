mod common;

use anyhow::Result;
use common::ScriptedHost;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tank_autopilot::constants::{MAX_FIRE_DISTANCE, SAFE_SHOOT_DISTANCE, SCAN_RESOLUTION_LOW};
use tank_autopilot::geometry::{bearing, distance, Point};
use tank_autopilot::state::{AgentMode, AgentState};
use tank_autopilot::weapons;

fn armed_state(position: Point, target: Point) -> AgentState {
    let mut state = AgentState::TEMPLATE;
    state.position = position;
    state.mode = AgentMode::Track;
    state.scanner.target = Some(target);
    state
}

#[test]
fn holds_fire_outside_track_mode() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(300.0, 300.0), 0.0);
    let mut state = armed_state(host.position, Point::new(500.0, 300.0));
    state.mode = AgentMode::Avoid;
    let mut rng = SmallRng::seed_from_u64(3);

    let fired = weapons::tick(&mut host, &mut state, &mut rng)?;

    assert!(!fired);
    assert!(host.shoots().is_empty());
    // The estimate is still mirrored for observability.
    assert_eq!(state.weapons.target, state.scanner.target);
    Ok(())
}

#[test]
fn holds_fire_without_an_estimate() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(300.0, 300.0), 0.0);
    let mut state = AgentState::TEMPLATE;
    state.position = host.position;
    state.mode = AgentMode::Track;
    let mut rng = SmallRng::seed_from_u64(3);

    assert!(!weapons::tick(&mut host, &mut state, &mut rng)?);
    assert!(host.shoots().is_empty());
    Ok(())
}

#[test]
fn holds_fire_beyond_max_range() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(100.0, 100.0), 0.0);
    let target = Point::new(100.0 + MAX_FIRE_DISTANCE + 1.0, 100.0);
    let mut state = armed_state(host.position, target);
    let mut rng = SmallRng::seed_from_u64(3);

    assert!(!weapons::tick(&mut host, &mut state, &mut rng)?);
    assert!(host.shoots().is_empty());
    Ok(())
}

#[test]
fn holds_fire_at_out_of_bounds_estimates() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(100.0, 100.0), 0.0);
    let mut state = armed_state(host.position, Point::new(300.0, -40.0));
    let mut rng = SmallRng::seed_from_u64(3);

    assert!(!weapons::tick(&mut host, &mut state, &mut rng)?);
    assert!(host.shoots().is_empty());
    Ok(())
}

#[test]
fn fires_with_range_matched_power() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(300.0, 300.0), 0.0);
    let target = Point::new(800.0, 300.0);
    let mut state = armed_state(host.position, target);
    state.scanner.variation = SCAN_RESOLUTION_LOW;
    let mut rng = SmallRng::seed_from_u64(3);

    let fired = weapons::tick(&mut host, &mut state, &mut rng)?;

    assert!(fired);
    assert_eq!(state.weapons.flying, 1);
    let shots = host.shoots();
    assert_eq!(shots.len(), 1);
    let (heading, power) = shots[0];
    assert_eq!(power, distance(state.position, target));
    let offset = heading - bearing(state.position, target);
    assert!(offset.abs() <= SCAN_RESOLUTION_LOW / 2.0);
    Ok(())
}

#[test]
fn point_blank_shots_use_the_power_floor() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(300.0, 300.0), 0.0);
    let mut state = armed_state(host.position, Point::new(350.0, 300.0));
    let mut rng = SmallRng::seed_from_u64(3);

    assert!(weapons::tick(&mut host, &mut state, &mut rng)?);
    assert_eq!(host.shoots()[0].1, SAFE_SHOOT_DISTANCE);
    Ok(())
}

#[test]
fn jitter_stays_within_half_the_scan_cone() -> Result<()> {
    let mut host = ScriptedHost::new(Point::new(300.0, 300.0), 0.0);
    let target = Point::new(800.0, 300.0);
    let mut rng = SmallRng::seed_from_u64(7);

    let mut state = armed_state(host.position, target);
    state.scanner.variation = 4.0;
    for _ in 0..100 {
        weapons::tick(&mut host, &mut state, &mut rng)?;
    }

    let aim = bearing(state.position, target);
    for (heading, _) in host.shoots() {
        assert!((heading - aim).abs() <= 2.0);
    }
    assert_eq!(state.weapons.flying, 100);
    Ok(())
}
