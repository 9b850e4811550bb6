//! Solver.
use super::{Mdp, State, TabularPolicy};
use crate::record::{NullRecorder, Recorder};
use anyhow::Result;
use std::collections::HashMap;

/// Output of a solver run.
pub struct Solution<S: State> {
    /// The derived greedy policy.
    pub policy: TabularPolicy<S>,

    /// Final state-value estimates, one entry per allowed state.
    ///
    /// For Q-learning this is the greedy value `max_a Q(s, a)`.
    pub values: HashMap<S, f64>,

    /// Diagnostic curve recorded while solving.
    ///
    /// Its meaning depends on the solver: mean state value per sweep (value
    /// iteration), mean policy change per improvement pass (policy
    /// iteration), or running mean greedy state value per environment
    /// transition (Q-learning).
    pub curve: Vec<f64>,
}

/// Computes an optimal policy for an environment.
///
/// The three algorithms in `tabrl-solver` are alternative strategies over
/// the same [`Mdp`] contract; callers hold whichever one they picked behind
/// this trait. A solver owns its value tables only for the duration of one
/// [`Solver::solve`] call and starts every call from scratch.
pub trait Solver<E: Mdp> {
    /// Runs the solver against `env` until its stopping condition is met.
    ///
    /// Dynamic-programming solvers have no iteration cap: an `epsilon` too
    /// small for the discount factor keeps the loop running. Sample-based
    /// solvers are bounded by their episode budget.
    fn solve(&mut self, env: &mut E) -> Result<Solution<E::State>> {
        self.solve_with_recorder(env, &mut NullRecorder {})
    }

    /// Runs the solver, writing per-iteration diagnostics to `recorder`.
    fn solve_with_recorder(
        &mut self,
        env: &mut E,
        recorder: &mut dyn Recorder,
    ) -> Result<Solution<E::State>>;
}
