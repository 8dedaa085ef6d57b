//! Action for [`DoorCorridorEnv`](super::DoorCorridorEnv).
use corridor_core::{error::EnvError, Act};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Action for [`DoorCorridorEnv`](super::DoorCorridorEnv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorCorridorAct {
    /// Turn left, index `0`.
    TurnLeft,

    /// Turn right, index `1`.
    TurnRight,

    /// Move one cell forward, index `2`.
    MoveForward,

    /// Open or close the door ahead, index `3`.
    Toggle,
}

impl DoorCorridorAct {
    /// All actions, ordered by index.
    pub const ALL: [DoorCorridorAct; 4] = [
        DoorCorridorAct::TurnLeft,
        DoorCorridorAct::TurnRight,
        DoorCorridorAct::MoveForward,
        DoorCorridorAct::Toggle,
    ];

    /// Index of the action.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnLeft => "LEFT",
            Self::TurnRight => "RIGHT",
            Self::MoveForward => "FORWARD",
            Self::Toggle => "TOGGLE",
        }
    }
}

impl Act for DoorCorridorAct {}

impl fmt::Display for DoorCorridorAct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for DoorCorridorAct {
    type Error = EnvError;

    fn try_from(ix: i64) -> Result<Self, Self::Error> {
        usize::try_from(ix)
            .ok()
            .and_then(|ix| Self::ALL.get(ix).copied())
            .ok_or_else(|| EnvError::InvalidAction(format!("index {}", ix)))
    }
}
