//! Exploration strategy of Q-learning.
use rand::Rng;
use serde::{Deserialize, Serialize};
use tabrl_core::{util, Action};

/// Epsilon-greedy explorer for Q-learning.
///
/// With probability `eps` a uniformly random action is taken, otherwise the
/// greedy one (first-occurring maximum of the Q row). The exploration
/// probability decays multiplicatively once per episode, not per step.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpsilonGreedy {
    /// Current exploration probability.
    pub eps: f64,

    /// Per-episode decay factor applied to `eps`.
    pub eps_decay: f64,
}

#[allow(clippy::new_without_default)]
impl EpsilonGreedy {
    /// Constructs epsilon-greedy explorer.
    pub fn new() -> Self {
        Self {
            eps: 1.0,
            eps_decay: 0.9995,
        }
    }

    /// Sets the initial exploration probability.
    pub fn eps(self, v: f64) -> Self {
        let mut s = self;
        s.eps = v;
        s
    }

    /// Sets the per-episode decay factor.
    pub fn eps_decay(self, v: f64) -> Self {
        let mut s = self;
        s.eps_decay = v;
        s
    }

    /// Decays the exploration probability. Called once per episode.
    pub fn decay(&mut self) {
        self.eps *= self.eps_decay;
    }

    /// Takes an action based on the Q row of the current state.
    pub fn action<R: Rng>(&self, qs: &[f64], actions: &[Action], rng: &mut R) -> Action {
        let is_random = rng.gen::<f64>() < self.eps;
        if is_random {
            actions[rng.gen_range(0..actions.len())]
        } else {
            actions[util::argmax(qs)]
        }
    }
}
