//! Policy.
use super::{Action, State};
use rand::Rng;
use std::collections::{hash_map, HashMap};

/// A deterministic tabular policy, mapping each state to one action.
///
/// This is the output format of every solver: no randomization happens at
/// decision time, ties between equally valued actions having been broken
/// when the table was filled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabularPolicy<S: State> {
    table: HashMap<S, Action>,
}

impl<S: State> TabularPolicy<S> {
    /// Creates an empty policy.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Creates a policy choosing an independently uniform-random action per
    /// state.
    pub fn random<R: Rng>(states: &[S], actions: &[Action], rng: &mut R) -> Self {
        let table = states
            .iter()
            .map(|s| (s.clone(), actions[rng.gen_range(0..actions.len())]))
            .collect();
        Self { table }
    }

    /// Assigns `act` to `state`.
    pub fn insert(&mut self, state: S, act: Action) {
        self.table.insert(state, act);
    }

    /// The action chosen in `state`, if the state is covered by the policy.
    pub fn act(&self, state: &S) -> Option<Action> {
        self.table.get(state).copied()
    }

    /// Number of states covered by the policy.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the policy covers no state.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns an iterator over the state-action pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, S, Action> {
        self.table.iter()
    }
}

impl<S: State> From<HashMap<S, Action>> for TabularPolicy<S> {
    fn from(table: HashMap<S, Action>) -> Self {
        Self { table }
    }
}

impl<'a, S: State> IntoIterator for &'a TabularPolicy<S> {
    type Item = (&'a S, &'a Action);
    type IntoIter = hash_map::Iter<'a, S, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}
