//! Types and traits for recording diagnostics of environment interaction.
//!
//! Every [`Env::step`](crate::Env::step) returns a [`Record`] next to the
//! [`Step`](crate::Step) object. The record holds whatever the environment
//! finds useful for debugging a transition, e.g. the raw agent position.
//!
//! ```rust
//! use corridor_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("agent_location", RecordValue::Scalar(2.0));
//! record.insert("wall_status", RecordValue::Array1(vec![0.0, 1.0]));
//! assert_eq!(record.get_scalar("agent_location").unwrap(), 2.0);
//! ```
//!
//! Records are written to a [`Recorder`]. [`BufferedRecorder`] keeps them in
//! memory, [`NullRecorder`] drops them.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
