use crate::geometry::Point;
use anyhow::Result;

/// The narrow remote interface the host exposes to an agent.
///
/// Every method is a blocking round trip: the calling task suspends until
/// the host responds, and no two calls are ever in flight concurrently for
/// one agent. A transport failure is opaque and fatal at this layer — an
/// agent that cannot reach its host has nothing useful left to do, so
/// errors propagate out of the tick loop unhandled.
pub trait HostLink {
    /// Current coordinates.
    fn position(&mut self) -> Result<Point>;

    /// Current speed magnitude.
    fn speed(&mut self) -> Result<f64>;

    /// Command movement along a bearing; `speed = 0` requests a stop.
    fn drive(&mut self, bearing_deg: f64, speed: f64) -> Result<()>;

    /// Fire along a bearing with the given power/range.
    fn shoot(&mut self, bearing_deg: f64, power: f64) -> Result<()>;

    /// Sweep a sensor cone along a bearing. Returns the distance to the
    /// nearest object inside the cone, or 0.0 when nothing is detected —
    /// a miss is a normal outcome, never an error.
    fn scan(&mut self, bearing_deg: f64, cone_deg: f64) -> Result<f64>;
}
