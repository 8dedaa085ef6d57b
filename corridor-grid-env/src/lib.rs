#![warn(missing_docs)]
//! Small partially observable environments for [`corridor_core`].
//!
//! * [`SpecialStateCorridorEnv`]: a one dimensional corridor, linear or
//!   circular (see [`CorridorGeometry`]), in which some states swap the
//!   effect of the left and right actions. The agent only observes the walls
//!   next to it.
//! * [`DoorCorridorEnv`]: a grid world where the agent opens a row of closed
//!   doors to reach the goal, seeing only a small egocentric window in which
//!   closed doors block the view.
//!
//! Here is an example of running the special-state corridor with a random
//! policy.
//!
//! ```
//! use anyhow::Result;
//! use corridor_core::{DefaultEvaluator, Evaluator as _, Policy};
//! use corridor_grid_env::{
//!     CorridorAct, CorridorObs, SpecialStateCorridorConfig, SpecialStateCorridorEnv,
//! };
//!
//! struct RandomPolicy(fastrand::Rng);
//!
//! impl Policy<SpecialStateCorridorEnv> for RandomPolicy {
//!     fn sample(&mut self, _: &CorridorObs) -> CorridorAct {
//!         CorridorAct::ALL[self.0.usize(..2)]
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let config = SpecialStateCorridorConfig::default();
//!     let mut policy = RandomPolicy(fastrand::Rng::with_seed(42));
//!
//!     // Every step costs 1, so the return is at least minus the step budget.
//!     let record = DefaultEvaluator::<SpecialStateCorridorEnv>::new(&config, 0, 5)?
//!         .evaluate(&mut policy)?;
//!     assert!(record.get_scalar("Episode return")? >= -50.0);
//!     Ok(())
//! }
//! ```
pub mod door_corridor;
mod geometry;
pub mod ss_corridor;
pub use door_corridor::{
    AgentDirection, Cell, DoorCorridorAct, DoorCorridorConfig, DoorCorridorEnv, DoorCorridorObs,
    DoorCorridorStepInfo, DoorState, ObjectKind,
};
pub use geometry::CorridorGeometry;
pub use ss_corridor::{
    CorridorAct, CorridorObs, CorridorResetInfo, CorridorStepInfo, SpecialStateCorridorConfig,
    SpecialStateCorridorEnv,
};
