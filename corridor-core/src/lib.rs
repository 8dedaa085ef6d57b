#![warn(missing_docs)]
//! Environment contract shared by the corridor environments.
//!
//! An environment ([`Env`]) is driven by an external caller that calls
//! [`Env::reset`] once and then [`Env::step`] until the returned [`Step`]
//! reports that the episode is done. A [`Policy`] maps observations to actions
//! and [`Evaluator`]s run whole episodes with it.
//!
//! ```mermaid
//! graph LR
//!     Env --> Obs
//!     Obs --> Policy
//!     Policy --> Act
//!     Act --> Env
//! ```
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

#[cfg(test)]
mod dummy;

#[cfg(test)]
mod tests {
    use super::{
        dummy::{DummyAct, DummyEnv, DummyObs, DummyPolicy},
        record::BufferedRecorder,
        util::eval_with_recorder,
        DefaultEvaluator, Env as _, Evaluator as _,
    };
    use test_log::test;

    #[test]
    fn test_step_with_reset_sets_init_obs() -> anyhow::Result<()> {
        let mut env = DummyEnv::build(&2, 0)?;
        env.reset(None)?;

        let (step, _) = env.step_with_reset(&DummyAct)?;
        assert!(!step.is_done());
        assert!(step.init_obs.is_none());

        let (step, _) = env.step_with_reset(&DummyAct)?;
        assert!(step.is_done());
        assert_eq!(step.obs, DummyObs(0));
        assert_eq!(step.init_obs, Some(DummyObs(2)));
        Ok(())
    }

    #[test]
    fn test_default_evaluator_averages_returns() -> anyhow::Result<()> {
        let mut evaluator = DefaultEvaluator::<DummyEnv>::new(&3, 0, 4)?;
        let record = evaluator.evaluate(&mut DummyPolicy)?;
        assert_eq!(record.get_scalar("Episode return")?, -3.0);
        Ok(())
    }

    #[test]
    fn test_eval_with_recorder_writes_every_step() -> anyhow::Result<()> {
        let mut env = DummyEnv::build(&5, 0)?;
        let mut recorder = BufferedRecorder::new();
        let returns = eval_with_recorder(&mut env, &mut DummyPolicy, 2, &mut recorder)?;

        assert_eq!(returns, vec![-5.0, -5.0]);
        assert_eq!(recorder.len(), 10);
        let last = recorder.iter().last().unwrap();
        assert_eq!(last.get_scalar("episode")?, 1.0);
        assert_eq!(last.get_scalar("step")?, 4.0);
        Ok(())
    }
}
