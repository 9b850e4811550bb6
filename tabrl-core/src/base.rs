//! Core functionalities.
mod env;
mod policy;
mod solver;
mod step;
pub use env::Mdp;
pub use policy::TabularPolicy;
pub use solver::{Solution, Solver};
pub use step::Step;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

/// A state of a finite MDP.
///
/// Solvers never look inside a state. It only needs to be usable as a key of
/// a value table, so any cloneable, hashable type qualifies and the trait is
/// implemented blanketly.
pub trait State: Clone + Debug + Eq + Hash {}

impl<T> State for T where T: Clone + Debug + Eq + Hash {}

/// An action of a finite MDP, identified by its index in the global action
/// set.
///
/// The action set is shared by all states. Environments declare it with
/// [`Mdp::states_and_actions`] and index it contiguously from zero, so the
/// index doubles as the position of the action's column in an action-value
/// table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(pub usize);

impl Action {
    /// Returns the index of the action in the global action set.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Action {
    fn from(ix: usize) -> Self {
        Self(ix)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
