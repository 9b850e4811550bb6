//! Configuration of [GridWorld](super::GridWorld).
use super::GridState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configurations of [`GridWorld`](super::GridWorld).
///
/// The default values reproduce the 4x4 task the library was written
/// around: start in the top-left corner, a +1 terminal at (2, 3), a -1
/// terminal at (1, 3), and two impassable cells.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GridWorldConfig {
    /// Number of rows of the grid.
    pub rows: i32,

    /// Number of columns of the grid.
    pub cols: i32,

    /// The cell every episode starts in.
    pub start: GridState,

    /// The positive terminal cell, rewarded with +1.
    pub goal: GridState,

    /// The negative terminal cell, rewarded with -1.
    pub hazard: GridState,

    /// Impassable cells, excluded from the state set.
    pub walls: Vec<GridState>,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            start: (0, 0),
            goal: (2, 3),
            hazard: (1, 3),
            walls: vec![(2, 2), (3, 0)],
        }
    }
}

impl GridWorldConfig {
    /// Sets the grid dimensions.
    pub fn shape(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the start cell.
    pub fn start(mut self, v: GridState) -> Self {
        self.start = v;
        self
    }

    /// Sets the positive terminal cell.
    pub fn goal(mut self, v: GridState) -> Self {
        self.goal = v;
        self
    }

    /// Sets the negative terminal cell.
    pub fn hazard(mut self, v: GridState) -> Self {
        self.hazard = v;
        self
    }

    /// Sets the impassable cells.
    pub fn walls(mut self, v: Vec<GridState>) -> Self {
        self.walls = v;
        self
    }

    /// Constructs [`GridWorldConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GridWorldConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GridWorldConfig;
    use tempdir::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new("gridworld_config").unwrap();
        let path = dir.path().join("config.yaml");
        let config = GridWorldConfig::default().shape(5, 5).goal((4, 4));
        config.save(&path).unwrap();
        assert_eq!(GridWorldConfig::load(&path).unwrap(), config);
    }
}
