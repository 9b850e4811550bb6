//! Environment step.
use super::State;

/// Outcome of one interaction with an environment.
///
/// Both [`Mdp::reset`](super::Mdp::reset) and [`Mdp::step`](super::Mdp::step)
/// emit a [`Step`] object. A reset carries the start state with zero reward.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S: State> {
    /// The state the environment is in after the transition.
    pub state: S,

    /// Reward obtained by the transition.
    pub reward: f64,

    /// Flag denoting if the episode ended with this transition.
    pub done: bool,
}

impl<S: State> Step<S> {
    /// Constructs a [`Step`] object.
    pub fn new(state: S, reward: f64, done: bool) -> Self {
        Self {
            state,
            reward,
            done,
        }
    }
}
