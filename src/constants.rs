//! Fixed configuration for the tactical controller.
//!
//! None of these are runtime-negotiated; the host arena and the scan/shoot
//! envelopes are match-wide constants.

// Arena dimensions (px)
pub const ARENA_WIDTH: f64 = 1340.0;
pub const ARENA_HEIGHT: f64 = 1000.0;

// Locomotion
pub const BREAK_DISTANCE: f64 = 250.0; // wall inset, also the arrival radius
pub const CRUISE_SPEED: f64 = 100.0;
pub const MAX_ARRIVAL_SPEED: f64 = 50.0; // above this we brake instead of declaring arrival
pub const TRACK_DISTANCE: f64 = 100.0; // stand-off before retreating to a corner
pub const CORNER_REGION: f64 = 200.0; // extent of a corner region for evasive picks

// Scanner cone widths (degrees); finer resolution = narrower cone.
// Each tracking state sweeps the cone width of its coarser predecessor, so a
// hit at one level always lands inside the next level's span.
pub const SCAN_RESOLUTION_LOW: f64 = 20.0;
pub const SCAN_RESOLUTION_HIGH: f64 = 4.0;
pub const SCAN_RESOLUTION_MAX: f64 = 1.0;
pub const LOCATE_SCAN_CONE: f64 = 80.0; // wide fixed span for the LOCATE sweep

// Search areas
pub const SEARCH_AREA_RADIUS: f64 = 50.0; // seeded around a lost target
pub const EXPLORE_RADIUS_MIN: f64 = 40.0;
pub const EXPLORE_RADIUS_MAX: f64 = 60.0;

// Weapons
pub const MAX_FIRE_DISTANCE: f64 = 700.0;
pub const SAFE_SHOOT_DISTANCE: f64 = 200.0; // minimum shot power, even point-blank
