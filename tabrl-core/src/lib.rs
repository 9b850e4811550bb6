#![warn(missing_docs)]
//! Core abstractions for solving finite, discrete Markov decision processes.
//!
//! This crate defines the environment contract ([`Mdp`]), the tabular data
//! model ([`TabularPolicy`], value tables keyed by state), the [`Solver`]
//! interface shared by the planning and learning algorithms in
//! `tabrl-solver`, and a [`record`](crate::record) module for collecting
//! diagnostics while a solver runs.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Action, Mdp, Solution, Solver, State, Step, TabularPolicy};
