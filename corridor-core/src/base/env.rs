//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// A single instance is mutated by exactly one caller; nothing here is
/// synchronized. Wrap the environment in a lock if it must be shared.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Information returned by [`Env::reset`].
    type ResetInfo: Info;

    /// Builds an environment with a given random seed.
    ///
    /// The configuration is validated here. An invalid configuration is an
    /// error and no environment is returned.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Starts a new episode.
    ///
    /// `seed`, if given, is used only for the random draws of this reset.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Self::Obs, Self::ResetInfo)>;

    /// Performes an environment step and resets the environment if the episode ends.
    ///
    /// The initial observation of the next episode is put in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (step, record) = self.step(a);
        if step.is_done() {
            let (init_obs, _) = self.reset(None)?;
            Ok((step.with_init_obs(init_obs), record))
        } else {
            Ok((step, record))
        }
    }

    /// Resets the environment with a given index.
    ///
    /// The index is used as the random seed of the reset, which makes
    /// evaluation episodes reproducible. This method is called in
    /// [`DefaultEvaluator`](crate::DefaultEvaluator).
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        let (obs, _) = self.reset(Some(ix as u64))?;
        Ok(obs)
    }
}
