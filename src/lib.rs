pub mod agent;
pub mod benchmark;
pub mod constants;
pub mod geometry;
pub mod host;
pub mod locomotion;
pub mod runner;
pub mod scanner;
pub mod sim;
pub mod state;
pub mod util;
pub mod weapons;

pub use agent::{Agent, TickOutcome};
pub use host::HostLink;
pub use state::{AgentMode, AgentState, Tracking};
