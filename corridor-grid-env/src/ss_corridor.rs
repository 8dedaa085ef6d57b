//! Special-state corridor.
//!
//! The agent walks a corridor with two actions, left and right. In a special
//! state the effect of the actions is swapped. The observation only tells the
//! agent whether there is a wall on its left or right, so special states are
//! invisible to it.
mod act;
mod config;
mod env;
mod obs;
pub use act::CorridorAct;
pub use config::SpecialStateCorridorConfig;
pub use env::{CorridorResetInfo, CorridorStepInfo, SpecialStateCorridorEnv};
pub use obs::CorridorObs;
