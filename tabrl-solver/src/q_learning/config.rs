//! Configuration of [QLearning](super::QLearning).
use super::EpsilonGreedy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`QLearning`](super::QLearning).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QLearningConfig {
    /// Learning rate of the temporal-difference update.
    pub alpha: f64,

    /// Discount factor, in `(0, 1]`.
    pub gamma: f64,

    /// Exploration strategy of the behavior policy.
    pub explorer: EpsilonGreedy,

    /// Number of episodes to run. The only bound on a Q-learning run.
    pub num_episodes: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            gamma: 0.9,
            explorer: EpsilonGreedy::new(),
            num_episodes: 10_000,
        }
    }
}

impl QLearningConfig {
    /// Sets the learning rate.
    pub fn alpha(mut self, v: f64) -> Self {
        self.alpha = v;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the exploration strategy.
    pub fn explorer(mut self, v: EpsilonGreedy) -> Self {
        self.explorer = v;
        self
    }

    /// Sets the episode budget.
    pub fn num_episodes(mut self, v: usize) -> Self {
        self.num_episodes = v;
        self
    }

    /// Constructs [`QLearningConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`QLearningConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
