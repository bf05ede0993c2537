//! Deterministic in-process arena used by the runner, the benchmark, and the
//! integration tests.
//!
//! The simulation advances a fixed slice of time on every host call, so one
//! agent tick costs a handful of simulated moments exactly like a chatty
//! remote link would. Targets are stationary; the interesting dynamics are
//! all on the agent side.

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::geometry::{bearing, distance, Point};
use crate::host::HostLink;
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Distance covered per unit of speed per host call.
const SIM_DT: f64 = 0.25;
/// Speed change per host call while converging on the commanded speed.
const SIM_ACCEL: f64 = 20.0;
/// A shot destroys a target within this distance of its impact range.
const BLAST_RADIUS: f64 = 25.0;
/// A shot's bearing must be within this many degrees of the target.
const AIM_TOLERANCE: f64 = 3.0;

struct Target {
    position: Point,
    alive: bool,
}

/// Minimal deterministic arena implementing [`HostLink`].
pub struct ArenaSim {
    position: Point,
    speed: f64,
    commanded_speed: f64,
    commanded_bearing: f64,
    targets: Vec<Target>,
    pub host_calls: u64,
    pub shots_fired: u64,
    pub targets_destroyed: u64,
    pub distance_travelled: f64,
}

impl ArenaSim {
    /// Arena with `target_count` stationary targets at seeded positions,
    /// agent starting at the origin.
    pub fn new(seed: u64, target_count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let targets = (0..target_count)
            .map(|_| Target {
                position: Point::new(
                    rng.gen_range(100.0..ARENA_WIDTH - 100.0),
                    rng.gen_range(100.0..ARENA_HEIGHT - 100.0),
                ),
                alive: true,
            })
            .collect();
        Self {
            position: Point::new(0.0, 0.0),
            speed: 0.0,
            commanded_speed: 0.0,
            commanded_bearing: 0.0,
            targets,
            host_calls: 0,
            shots_fired: 0,
            targets_destroyed: 0,
            distance_travelled: 0.0,
        }
    }

    /// Same arena but with the agent placed explicitly.
    pub fn with_start(seed: u64, target_count: usize, start: Point) -> Self {
        let mut sim = Self::new(seed, target_count);
        sim.position = start;
        sim
    }

    pub fn all_targets_down(&self) -> bool {
        self.targets.iter().all(|t| !t.alive)
    }

    pub fn targets_alive(&self) -> usize {
        self.targets.iter().filter(|t| t.alive).count()
    }

    /// Advance one time slice. Called on every host round trip.
    fn advance(&mut self) {
        self.host_calls += 1;
        if self.speed < self.commanded_speed {
            self.speed = (self.speed + SIM_ACCEL).min(self.commanded_speed);
        } else if self.speed > self.commanded_speed {
            self.speed = (self.speed - SIM_ACCEL).max(self.commanded_speed);
        }
        if self.speed > 0.0 {
            let step = self.speed * SIM_DT;
            let rad = self.commanded_bearing.to_radians();
            self.position.x = (self.position.x + step * rad.cos()).clamp(0.0, ARENA_WIDTH);
            self.position.y = (self.position.y + step * rad.sin()).clamp(0.0, ARENA_HEIGHT);
            self.distance_travelled += step;
        }
    }
}

/// Signed angular difference `a - b` normalized into (-180, 180].
fn angular_delta(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0)) - 180.0
}

impl HostLink for ArenaSim {
    fn position(&mut self) -> Result<Point> {
        self.advance();
        Ok(self.position)
    }

    fn speed(&mut self) -> Result<f64> {
        self.advance();
        Ok(self.speed)
    }

    fn drive(&mut self, bearing_deg: f64, speed: f64) -> Result<()> {
        self.advance();
        self.commanded_bearing = bearing_deg;
        self.commanded_speed = speed.max(0.0);
        Ok(())
    }

    fn shoot(&mut self, bearing_deg: f64, power: f64) -> Result<()> {
        self.advance();
        self.shots_fired += 1;
        let origin = self.position;
        for target in self.targets.iter_mut().filter(|t| t.alive) {
            let dist = distance(origin, target.position);
            let aim = angular_delta(bearing_deg, bearing(origin, target.position));
            if (dist - power).abs() <= BLAST_RADIUS && aim.abs() <= AIM_TOLERANCE {
                target.alive = false;
                self.targets_destroyed += 1;
            }
        }
        Ok(())
    }

    fn scan(&mut self, bearing_deg: f64, cone_deg: f64) -> Result<f64> {
        self.advance();
        let origin = self.position;
        let half = cone_deg / 2.0;
        let nearest = self
            .targets
            .iter()
            .filter(|t| t.alive)
            .filter(|t| angular_delta(bearing(origin, t.position), bearing_deg).abs() <= half)
            .map(|t| distance(origin, t.position))
            .fold(f64::INFINITY, f64::min);
        if nearest.is_finite() {
            Ok(nearest)
        } else {
            Ok(0.0)
        }
    }
}
