//! Tabular reinforcement learning for finite Markov decision processes.
//!
//! tabrl consists of the following crates:
//!
//! * [tabrl-core](../tabrl_core/index.html) provides the [`Mdp`] environment
//!   contract, tabular policies and value tables, the [`Solver`] interface,
//!   and diagnostic records.
//! * [tabrl-env](../tabrl_env/index.html) contains the reference
//!   environments: [`GridWorld`], a navigation task with stochastic
//!   perpendicular drift, and [`BitFlip`], a bit-string toggling puzzle.
//! * [tabrl-solver](../tabrl_solver/index.html) implements the solvers:
//!   [`ValueIteration`], [`PolicyIteration`], and [`QLearning`].
//!
//! This crate re-exports the public surface of all three.
pub use tabrl_core::{
    error, record, util, Action, Mdp, Solution, Solver, State, Step, TabularPolicy,
};
pub use tabrl_env::{
    bit_strings, BitFlip, BitFlipConfig, GridState, GridWorld, GridWorldConfig, DOWN, LEFT, RIGHT,
    UP,
};
pub use tabrl_solver::{
    EpsilonGreedy, PolicyIteration, PolicyIterationConfig, QLearning, QLearningConfig,
    ValueIteration, ValueIterationConfig,
};
