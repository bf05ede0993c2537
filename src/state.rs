use crate::constants::SCAN_RESOLUTION_LOW;
use crate::geometry::Point;
use core::fmt;

// ── Modes ───────────────────────────────────────────────────────────

/// Top-level agent mode; drives both locomotion and scanner behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentMode {
    Opening,
    Avoid,
    Track,
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening => write!(f, "OPENING"),
            Self::Avoid => write!(f, "AVOID"),
            Self::Track => write!(f, "TRACK"),
        }
    }
}

/// Tracking confidence level, ordered from least to most precise knowledge
/// of the target's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracking {
    Never,
    Locate,
    Pinpoint,
    Found,
    Search,
}

impl fmt::Display for Tracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => write!(f, "NEVER"),
            Self::Locate => write!(f, "LOCATE"),
            Self::Pinpoint => write!(f, "PINPOINT"),
            Self::Found => write!(f, "FOUND"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

// ── Component state ─────────────────────────────────────────────────

/// A circular region swept incrementally across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchArea {
    pub center: Point,
    pub radius: f64,
}

/// Drive-to-point state: at most one committed destination in flight and at
/// most one staged successor. Newer requests overwrite the pending slot,
/// never the in-flight destination.
#[derive(Clone, Copy, Debug)]
pub struct NavState {
    /// True exactly while a destination commitment is in flight.
    pub driving: bool,
    pub current: Option<Point>,
    pub next: Option<Point>,
    /// Clamped version of the committed destination.
    pub safe: Option<Point>,
}

#[derive(Clone, Copy, Debug)]
pub struct ScannerState {
    pub tracking: Tracking,
    /// Fraction of the current angular sweep completed, in [0, 1); >= 1
    /// signals exhaustion. Resets on every hit and every state transition.
    pub progress: f64,
    /// Best current estimate of the target's position.
    pub target: Option<Point>,
    /// Cone width of the most recent sweep; the weapons jitter budget.
    pub variation: f64,
    pub area: Option<SearchArea>,
    /// True while an explore area is partially swept.
    pub scanning: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct WeaponsState {
    /// Mirror of the scanner's estimate, refreshed each tick.
    pub target: Option<Point>,
    /// Shots issued so far. Informational only.
    pub flying: u32,
}

/// Full mutable state of one agent. Owned per agent instance so repeated
/// runs and concurrent agents never share positioning state.
#[derive(Clone, Copy, Debug)]
pub struct AgentState {
    pub mode: AgentMode,
    /// Cached at the top of every tick.
    pub position: Point,
    pub speed: f64,
    pub nav: NavState,
    pub scanner: ScannerState,
    pub weapons: WeaponsState,
}

impl AgentState {
    /// Immutable initial template. Every agent starts from a copy of this,
    /// so later mutation can never corrupt the template.
    pub const TEMPLATE: AgentState = AgentState {
        mode: AgentMode::Opening,
        position: Point::new(0.0, 0.0),
        speed: 0.0,
        nav: NavState {
            driving: false,
            current: None,
            next: None,
            safe: None,
        },
        scanner: ScannerState {
            tracking: Tracking::Never,
            progress: 0.0,
            target: None,
            variation: SCAN_RESOLUTION_LOW,
            area: None,
            scanning: false,
        },
        weapons: WeaponsState {
            target: None,
            flying: 0,
        },
    };
}
