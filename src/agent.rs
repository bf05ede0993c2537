//! Top-level tick orchestration.
//!
//! Each tick runs the subsystems in a fixed order: refresh position and
//! speed, locomotion, weapons, scanner, locomotion again. The trailing
//! locomotion pass lets a destination chosen by this tick's scan result take
//! effect in the same tick.

use crate::host::HostLink;
use crate::state::AgentState;
use crate::{locomotion, scanner, weapons};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickOutcome {
    /// An arrival was confirmed by either locomotion pass.
    pub arrived: bool,
    /// A shot was issued.
    pub fired: bool,
}

/// One agent: a host connection, a private state copy, and a seeded RNG.
pub struct Agent<H: HostLink> {
    host: H,
    pub state: AgentState,
    rng: SmallRng,
}

impl<H: HostLink> Agent<H> {
    pub fn new(host: H, seed: u64) -> Self {
        Self {
            host,
            state: AgentState::TEMPLATE,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Run one orchestrated tick.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.state.position = self.host.position()?;
        self.state.speed = self.host.speed()?;

        let arrived_early = locomotion::tick(&mut self.host, &mut self.state, &mut self.rng)?;
        let fired = weapons::tick(&mut self.host, &mut self.state, &mut self.rng)?;
        scanner::tick(&mut self.host, &mut self.state, &mut self.rng)?;
        let arrived_late = locomotion::tick(&mut self.host, &mut self.state, &mut self.rng)?;

        Ok(TickOutcome {
            arrived: arrived_early || arrived_late,
            fired,
        })
    }

    /// Tick forever. Only a host error ends the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.tick()?;
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
