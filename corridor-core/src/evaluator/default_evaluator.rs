//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{record::Record, Env, Policy};
use anyhow::Result;
use log::info;

/// Runs a fixed number of episodes and averages their returns.
///
/// Episode `i` is started with [`Env::reset_with_index`]`(i)`, so two
/// evaluators built from the same configuration and seed see the same
/// sequence of start states.
///
/// ```ignore
/// let config = SpecialStateCorridorConfig::default();
/// let mut evaluator = DefaultEvaluator::<SpecialStateCorridorEnv>::new(&config, 42, 10)?;
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Returns a record with the key `"Episode return"`.
    ///
    /// Episodes end on termination or truncation, so the loop is bounded by
    /// the truncation limit of the environment.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            let mut r_episode = 0f32;
            let mut n_steps = 0usize;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act);
                r_episode += step.reward;
                n_steps += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }

            info!(
                "Episode {}, {} steps, return = {}",
                ix, n_steps, r_episode
            );
            r_total += r_episode;
        }

        let name = "Episode return";
        Ok(Record::from_scalar(name, r_total / self.n_episodes as f32))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// Fails if the environment cannot be built from `config`.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
