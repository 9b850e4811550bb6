//! Environment.
use super::{Action, State, Step};
use anyhow::Result;

/// Represents a finite Markov decision process.
///
/// The trait combines the two views a tabular solver needs:
///
/// * a *model* view — enumeration of the state and action spaces and queries
///   for transition probabilities and rewards, used by dynamic-programming
///   solvers;
/// * an *interaction* view — [`Mdp::reset`] and [`Mdp::step`], used by
///   sample-based solvers that never read the model directly.
///
/// Implementations must keep the two views consistent: the distribution of
/// `step` outcomes for a state-action pair has to match
/// [`Mdp::transition_prob`], and for every non-terminal pair the
/// probabilities over all successor states sum to 1. Terminal states have
/// zero outgoing probability for every action.
pub trait Mdp {
    /// Configuration of the environment.
    type Config: Clone;

    /// State of the environment.
    type State: State;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Enumerates every allowed state and the global action set.
    ///
    /// Both sequences must be stable across calls within one solve; solvers
    /// sweep states in the returned order.
    fn states_and_actions(&self) -> (Vec<Self::State>, Vec<Action>);

    /// The states from which no further reward-bearing transition occurs.
    fn terminal_states(&self) -> Vec<Self::State>;

    /// Probability of reaching `next_state` when taking `act` in `state`.
    ///
    /// Returns 0 for an out-of-range action, a terminal `state`, or a
    /// `next_state` unreachable from `(state, act)`.
    fn transition_prob(&self, state: &Self::State, act: Action, next_state: &Self::State) -> f64;

    /// Deterministic reward of the transition `(state, act, next_state)`.
    fn reward(&self, state: &Self::State, act: Action, next_state: &Self::State) -> f64;

    /// Reinitializes the episode state.
    ///
    /// Returns the start state with zero reward and `done == false`.
    fn reset(&mut self) -> Step<Self::State>;

    /// Performes an environment step.
    ///
    /// Applies the stochastic transition dynamics and returns the successor
    /// state, the obtained reward, and whether the episode just ended.
    /// Stepping a finished episode is a no-op returning the current state
    /// with zero reward and `done == true`.
    ///
    /// # Errors
    ///
    /// Fails with [`TabrlError::InvalidAction`](crate::error::TabrlError)
    /// when `act` is outside the declared action set.
    fn step(&mut self, act: Action) -> Result<Step<Self::State>>;
}
