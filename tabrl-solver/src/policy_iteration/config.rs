//! Configuration of [PolicyIteration](super::PolicyIteration).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`PolicyIteration`](super::PolicyIteration).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PolicyIterationConfig {
    /// Discount factor, in `(0, 1]`.
    pub gamma: f64,

    /// Convergence threshold of the policy-evaluation sweeps.
    pub epsilon: f64,
}

impl Default for PolicyIterationConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.0001,
        }
    }
}

impl PolicyIterationConfig {
    /// Sets the discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the convergence threshold.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Constructs [`PolicyIterationConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`PolicyIterationConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
