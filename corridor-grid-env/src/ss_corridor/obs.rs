//! Observation of [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
use crate::CorridorGeometry;
use corridor_core::{record::RecordValue, Obs};
use serde::{Deserialize, Serialize};

/// Observation of [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorObs {
    /// `[left, right]`, `1` if there is a wall on that side.
    pub wall_status: [u8; 2],

    /// Raw position of the agent, for training with full observation.
    pub agent_location: usize,
}

impl CorridorObs {
    /// Encodes the observation at `agent_location`.
    pub fn encode(geometry: CorridorGeometry, agent_location: usize, length: usize) -> Self {
        Self {
            wall_status: geometry.wall_status(agent_location, length),
            agent_location,
        }
    }

    pub(super) fn wall_status_record(&self) -> RecordValue {
        RecordValue::Array1(self.wall_status.iter().map(|&w| w as f32).collect())
    }
}

impl Obs for CorridorObs {}
