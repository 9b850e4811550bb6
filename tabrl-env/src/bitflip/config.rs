//! Configuration of [BitFlip](super::BitFlip).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configurations of [`BitFlip`](super::BitFlip).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BitFlipConfig {
    /// Number of bits in the string.
    ///
    /// The state set has `2^len` elements, so the length is capped at build
    /// time to keep enumeration tractable.
    pub len: usize,
}

impl Default for BitFlipConfig {
    fn default() -> Self {
        Self { len: 9 }
    }
}

impl BitFlipConfig {
    /// Sets the number of bits.
    pub fn len(mut self, v: usize) -> Self {
        self.len = v;
        self
    }

    /// Constructs [`BitFlipConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`BitFlipConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BitFlipConfig;
    use tempdir::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new("bitflip_config").unwrap();
        let path = dir.path().join("config.yaml");
        let config = BitFlipConfig::default().len(5);
        config.save(&path).unwrap();
        assert_eq!(BitFlipConfig::load(&path).unwrap(), config);
    }
}
