//! Position arithmetic of a one dimensional corridor.
use serde::{Deserialize, Serialize};

/// Topology of a corridor of `length` cells indexed `0..length`.
///
/// * [`CorridorGeometry::Linear`]: the corridor has two ends. Moving past an
///   end leaves the agent where it is.
/// * [`CorridorGeometry::Circular`]: the cells form a ring, cell `length - 1`
///   is next to cell `0`. Moving left is one step anti-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorGeometry {
    /// A corridor with a wall at each end.
    #[default]
    Linear,

    /// A ring without ends.
    Circular,
}

impl CorridorGeometry {
    /// Moves `pos` by `delta` cells.
    ///
    /// `pos` must be in `0..length` and the result is in `0..length`.
    pub fn move_by(&self, pos: usize, delta: i64, length: usize) -> usize {
        let length = length as i64;
        let new_pos = pos as i64 + delta;
        let new_pos = match self {
            Self::Linear => new_pos.clamp(0, length - 1),
            Self::Circular => new_pos.rem_euclid(length),
        };
        new_pos as usize
    }

    /// Number of moves needed to go from `a` to `b`.
    ///
    /// On a ring this is the shorter of the two arcs.
    pub fn distance(&self, a: usize, b: usize, length: usize) -> usize {
        let diff = a.abs_diff(b);
        match self {
            Self::Linear => diff,
            Self::Circular => diff.min(length - diff),
        }
    }

    /// Wall sensor readings `[left, right]` at `pos`, `1` where there is a wall.
    pub fn wall_status(&self, pos: usize, length: usize) -> [u8; 2] {
        match self {
            Self::Linear if pos == 0 => [1, 0],
            Self::Linear if pos == length - 1 => [0, 1],
            _ => [0, 0],
        }
    }
}
