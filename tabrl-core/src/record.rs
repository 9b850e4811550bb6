//! Records of diagnostic values produced while a solver runs.
//!
//! A [`Record`] is a set of key-value pairs written by a solver once per
//! sweep, improvement pass, or episode. Where the records go is decided by
//! the [`Recorder`] given to
//! [`Solver::solve_with_recorder`](crate::Solver::solve_with_recorder):
//! [`BufferedRecorder`] keeps them in memory for later inspection or export,
//! [`NullRecorder`] discards them.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;
pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
