//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::Policy;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments are not vectorized: an object implementing this trait holds
/// the observation of exactly one environment instance.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
///
/// Actions are closed sets. Converting from a raw representation (an index or
/// a string token) is the only place where an invalid action can show up.
pub trait Act: Clone + Debug {}
