//! This module is used for tests.
use crate::{record::Record, Act, Env, Info, Obs, Step};
use anyhow::Result;

#[derive(Clone, Debug, PartialEq)]
/// Dummy observation, the number of steps left in the episode.
pub struct DummyObs(pub usize);

impl Obs for DummyObs {}

#[derive(Clone, Debug)]
/// Dummy action.
pub struct DummyAct;

impl Act for DummyAct {}

#[derive(Clone, Debug)]
/// Dummy info.
pub struct DummyInfo;

impl Info for DummyInfo {}

/// Dummy env, the episode terminates after `config` steps.
pub struct DummyEnv {
    length: usize,
    left: usize,
}

impl Env for DummyEnv {
    type Config = usize;
    type Act = DummyAct;
    type Obs = DummyObs;
    type Info = DummyInfo;
    type ResetInfo = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            length: *config,
            left: *config,
        })
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<(Self::Obs, Self::ResetInfo)> {
        self.left = self.length;
        Ok((DummyObs(self.left), ()))
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        self.left = self.left.saturating_sub(1);
        let step = Step::new(
            DummyObs(self.left),
            a.clone(),
            -1.0,
            self.left == 0,
            false,
            DummyInfo,
        );
        (step, Record::empty())
    }
}

/// Dummy policy, always returns [`DummyAct`].
pub struct DummyPolicy;

impl crate::Policy<DummyEnv> for DummyPolicy {
    fn sample(&mut self, _obs: &DummyObs) -> DummyAct {
        DummyAct
    }
}
