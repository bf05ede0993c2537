#![allow(dead_code)]

use anyhow::Result;
use std::collections::VecDeque;
use tank_autopilot::geometry::Point;
use tank_autopilot::host::HostLink;

/// Every host round trip, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCall {
    Position,
    Speed,
    Drive { bearing: f64, speed: f64 },
    Shoot { bearing: f64, power: f64 },
    Scan { bearing: f64, cone: f64 },
}

/// Scripted host: fixed position/speed readings, queued scan responses, and
/// a full call log.
pub struct ScriptedHost {
    pub position: Point,
    pub speed: f64,
    pub scan_returns: VecDeque<f64>,
    pub calls: Vec<HostCall>,
}

impl ScriptedHost {
    pub fn new(position: Point, speed: f64) -> Self {
        Self {
            position,
            speed,
            scan_returns: VecDeque::new(),
            calls: Vec::new(),
        }
    }

    /// Queue responses for upcoming scans; an empty queue reads as a miss.
    pub fn queue_scans(&mut self, returns: impl IntoIterator<Item = f64>) {
        self.scan_returns.extend(returns);
    }

    pub fn drives(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Drive { bearing, speed } => Some((*bearing, *speed)),
                _ => None,
            })
            .collect()
    }

    pub fn shoots(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Shoot { bearing, power } => Some((*bearing, *power)),
                _ => None,
            })
            .collect()
    }

    pub fn scans(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Scan { bearing, cone } => Some((*bearing, *cone)),
                _ => None,
            })
            .collect()
    }
}

impl HostLink for ScriptedHost {
    fn position(&mut self) -> Result<Point> {
        self.calls.push(HostCall::Position);
        Ok(self.position)
    }

    fn speed(&mut self) -> Result<f64> {
        self.calls.push(HostCall::Speed);
        Ok(self.speed)
    }

    fn drive(&mut self, bearing_deg: f64, speed: f64) -> Result<()> {
        self.calls.push(HostCall::Drive {
            bearing: bearing_deg,
            speed,
        });
        Ok(())
    }

    fn shoot(&mut self, bearing_deg: f64, power: f64) -> Result<()> {
        self.calls.push(HostCall::Shoot {
            bearing: bearing_deg,
            power,
        });
        Ok(())
    }

    fn scan(&mut self, bearing_deg: f64, cone_deg: f64) -> Result<f64> {
        self.calls.push(HostCall::Scan {
            bearing: bearing_deg,
            cone: cone_deg,
        });
        Ok(self.scan_returns.pop_front().unwrap_or(0.0))
    }
}
