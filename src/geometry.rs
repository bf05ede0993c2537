use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, BREAK_DISTANCE};

// ── Points ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Displace `from` by `range` along a bearing (degrees, 0° = +x,
/// counter-clockwise).
pub fn project(from: Point, bearing_deg: f64, range: f64) -> Point {
    let rad = bearing_deg.to_radians();
    Point::new(from.x + range * rad.cos(), from.y + range * rad.sin())
}

// ── Bearings ────────────────────────────────────────────────────────

/// Bearing from `from` toward `to`, in degrees normalized into [0, 360).
///
/// Quadrant-corrected atan rather than atan2, matching the host convention.
/// A purely vertical displacement returns 90°/270° regardless of magnitude;
/// the degenerate `from == to` case falls into the 270° branch. Callers rely
/// on that exact contract — do not "fix" it.
pub fn bearing(from: Point, to: Point) -> f64 {
    if to.x == from.x {
        return if to.y > from.y { 90.0 } else { 270.0 };
    }
    let mut angle = ((to.y - from.y) / (to.x - from.x)).atan().to_degrees();
    if to.x < from.x {
        angle += 180.0;
    } else if to.y < from.y {
        angle += 360.0;
    }
    angle
}

// ── Arena regions ───────────────────────────────────────────────────

/// Clamp a point into the safe rectangle, inset `BREAK_DISTANCE` from every
/// wall.
pub fn clamp_to_safe_region(p: Point) -> Point {
    Point::new(
        p.x.clamp(BREAK_DISTANCE, ARENA_WIDTH - BREAK_DISTANCE),
        p.y.clamp(BREAK_DISTANCE, ARENA_HEIGHT - BREAK_DISTANCE),
    )
}

pub fn in_arena(p: Point) -> bool {
    p.x >= 0.0 && p.x <= ARENA_WIDTH && p.y >= 0.0 && p.y <= ARENA_HEIGHT
}

/// Quadrant of a point, 1-4, split by the arena center lines.
pub fn quadrant_of(p: Point) -> u8 {
    let east = p.x > ARENA_WIDTH / 2.0;
    let north = p.y > ARENA_HEIGHT / 2.0;
    match (east, north) {
        (false, false) => 1,
        (true, false) => 2,
        (false, true) => 3,
        (true, true) => 4,
    }
}

/// Rally corner for a quadrant: same horizontal half, opposite vertical
/// half, inset by `BREAK_DISTANCE` on both axes.
pub fn corner_for_quadrant(quadrant: u8) -> Point {
    const INSET: f64 = BREAK_DISTANCE;
    match quadrant {
        1 => Point::new(INSET, ARENA_HEIGHT - INSET),
        2 => Point::new(ARENA_WIDTH - INSET, ARENA_HEIGHT - INSET),
        3 => Point::new(INSET, INSET),
        _ => Point::new(ARENA_WIDTH - INSET, INSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn bearing_covers_all_quadrants() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(bearing(origin, Point::new(200.0, 100.0)), 0.0);
        assert!((bearing(origin, Point::new(200.0, 200.0)) - 45.0).abs() < 1e-9);
        assert!((bearing(origin, Point::new(0.0, 200.0)) - 135.0).abs() < 1e-9);
        assert!((bearing(origin, Point::new(0.0, 0.0)) - 225.0).abs() < 1e-9);
        assert!((bearing(origin, Point::new(200.0, 0.0)) - 315.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_bearing_contract() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(bearing(origin, Point::new(100.0, 900.0)), 90.0);
        assert_eq!(bearing(origin, Point::new(100.0, 5.0)), 270.0);
        // Degenerate equal-points case shares the "below" branch.
        assert_eq!(bearing(origin, origin), 270.0);
    }

    #[test]
    fn clamp_stays_in_safe_region() {
        for p in [
            Point::new(-50.0, -50.0),
            Point::new(5000.0, 5000.0),
            Point::new(670.0, 500.0),
            Point::new(0.0, 999.0),
        ] {
            let safe = clamp_to_safe_region(p);
            assert!(safe.x >= BREAK_DISTANCE && safe.x <= ARENA_WIDTH - BREAK_DISTANCE);
            assert!(safe.y >= BREAK_DISTANCE && safe.y <= ARENA_HEIGHT - BREAK_DISTANCE);
        }
    }

    #[test]
    fn quadrants_and_rally_corners() {
        assert_eq!(quadrant_of(Point::new(0.0, 0.0)), 1);
        assert_eq!(quadrant_of(Point::new(1340.0, 0.0)), 2);
        assert_eq!(quadrant_of(Point::new(0.0, 1000.0)), 3);
        assert_eq!(quadrant_of(Point::new(1340.0, 1000.0)), 4);

        assert_eq!(corner_for_quadrant(1), Point::new(250.0, 750.0));
        assert_eq!(corner_for_quadrant(2), Point::new(1090.0, 750.0));
        assert_eq!(corner_for_quadrant(3), Point::new(250.0, 250.0));
        assert_eq!(corner_for_quadrant(4), Point::new(1090.0, 250.0));
    }

    #[test]
    fn projection_round_trip() {
        let start = Point::new(300.0, 300.0);
        let hit = project(start, 30.0, 500.0);
        assert!((distance(start, hit) - 500.0).abs() < 1e-9);
        assert!((bearing(start, hit) - 30.0).abs() < 1e-9);
    }
}
