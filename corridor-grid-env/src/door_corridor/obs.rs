//! Observation of [`DoorCorridorEnv`](super::DoorCorridorEnv).
use super::{AgentDirection, View};
use corridor_core::Obs;

/// Observation of [`DoorCorridorEnv`](super::DoorCorridorEnv).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorCorridorObs {
    /// What the agent sees in front of it.
    pub image: View,

    /// Facing of the agent in the grid.
    pub direction: AgentDirection,
}

impl Obs for DoorCorridorObs {}
