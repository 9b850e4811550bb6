//! Configuration of [ValueIteration](super::ValueIteration).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`ValueIteration`](super::ValueIteration).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ValueIterationConfig {
    /// Discount factor, in `(0, 1]`.
    pub gamma: f64,

    /// Convergence threshold on the largest per-state value change of a
    /// sweep. Must be positive; there is no iteration cap, a threshold too
    /// tight for the discount factor keeps the solver sweeping.
    pub epsilon: f64,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.0001,
        }
    }
}

impl ValueIterationConfig {
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

    /// Constructs [`ValueIterationConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ValueIterationConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
