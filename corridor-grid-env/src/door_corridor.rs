//! Door corridor.
//!
//! A small grid world in the style of MiniGrid's key corridor: a three rows
//! high room whose middle row is a corridor of closed doors between the start
//! and the goal. The agent turns, moves forward and toggles doors, and sees
//! only a small egocentric window in front of it. Closed doors block the view.
//!
//! ```text
//! #######
//! #^DDDG#
//! #######
//! ```
mod act;
mod config;
mod env;
mod grid;
mod obs;
mod view;
pub use act::DoorCorridorAct;
pub use config::DoorCorridorConfig;
pub use env::{DoorCorridorEnv, DoorCorridorStepInfo};
pub use grid::{AgentDirection, Cell, DoorState, Grid, ObjectKind};
pub use obs::DoorCorridorObs;
pub use view::View;
