//! Action for [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
use corridor_core::{error::EnvError, Act};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Action for [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorridorAct {
    /// Move one cell to the left, index `0`, token `"L"`.
    Left,

    /// Move one cell to the right, index `1`, token `"R"`.
    Right,
}

impl CorridorAct {
    /// All actions, ordered by index.
    pub const ALL: [CorridorAct; 2] = [CorridorAct::Left, CorridorAct::Right];

    /// The one-letter token of the action.
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }

    /// Movement of the action outside of special states.
    pub(super) fn nominal_delta(&self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

impl Act for CorridorAct {}

impl fmt::Display for CorridorAct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for CorridorAct {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            _ => Err(EnvError::InvalidAction(format!("{:?}", s))),
        }
    }
}

impl TryFrom<i64> for CorridorAct {
    type Error = EnvError;

    fn try_from(ix: i64) -> Result<Self, Self::Error> {
        match ix {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(EnvError::InvalidAction(format!("index {}", ix))),
        }
    }
}
