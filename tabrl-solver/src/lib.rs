#![warn(missing_docs)]
//! Solvers for finite, discrete MDPs.
//!
//! Three alternative strategies over the [`Mdp`](tabrl_core::Mdp) contract:
//!
//! * [`ValueIteration`] — Bellman-optimality backups swept over the state
//!   set until the value function stops moving.
//! * [`PolicyIteration`] — alternating exact policy evaluation and greedy
//!   improvement until the policy stabilizes.
//! * [`QLearning`] — sample-based action-value estimation under an
//!   epsilon-greedy behavior policy.
//!
//! The two dynamic-programming solvers read the transition model through
//! [`Mdp::transition_prob`](tabrl_core::Mdp::transition_prob) and never call
//! [`Mdp::step`](tabrl_core::Mdp::step); Q-learning does the opposite. All
//! of them return a [`Solution`](tabrl_core::Solution) holding the greedy
//! policy, the final value estimates, and a diagnostic curve.
mod policy_iteration;
mod q_learning;
mod value_iteration;
pub use policy_iteration::{PolicyIteration, PolicyIterationConfig};
pub use q_learning::{EpsilonGreedy, QLearning, QLearningConfig};
pub use value_iteration::{ValueIteration, ValueIterationConfig};
