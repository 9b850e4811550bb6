//! Grid navigation environment.
mod config;
pub use config::GridWorldConfig;

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tabrl_core::{error::TabrlError, Action, Mdp, Step};

/// A cell of the grid, as `(row, col)`.
pub type GridState = (i32, i32);

/// Move one row up.
pub const UP: Action = Action(0);
/// Move one column right.
pub const RIGHT: Action = Action(1);
/// Move one row down.
pub const DOWN: Action = Action(2);
/// Move one column left.
pub const LEFT: Action = Action(3);

// Row/column deltas indexed by action.
const DR: [i32; 4] = [-1, 0, 1, 0];
const DC: [i32; 4] = [0, 1, 0, -1];

/// Navigation on a rectangular grid with stochastic perpendicular drift.
///
/// The agent starts in a fixed cell and tries to reach the positive terminal
/// cell (+1) while avoiding the negative one (-1). A move goes in the
/// intended direction with probability 1/3 and drifts into each of the two
/// perpendicular directions with probability 1/3. A move into a wall or off
/// the board leaves the position unchanged, so every transition row still
/// sums to one.
pub struct GridWorld {
    rows: i32,
    cols: i32,
    start: GridState,
    goal: GridState,
    hazard: GridState,
    walls: HashSet<GridState>,
    pos: GridState,
    rng: StdRng,
}

impl GridWorld {
    fn in_bounds(&self, (r, c): GridState) -> bool {
        r >= 0 && r < self.rows && c >= 0 && c < self.cols
    }

    fn passable(&self, cell: GridState) -> bool {
        self.in_bounds(cell) && !self.walls.contains(&cell)
    }

    fn is_terminal(&self, cell: GridState) -> bool {
        cell == self.hazard || cell == self.goal
    }

    // The three directions a move can resolve to: the two perpendicular
    // drifts and the intended direction itself.
    fn drift_directions(act: Action) -> [usize; 3] {
        if act.index() % 2 == 0 {
            [1, 3, act.index()]
        } else {
            [0, 2, act.index()]
        }
    }

    // Resulting cell of each drift direction; a blocked move stays in place.
    fn drift_outcomes(&self, from: GridState, act: Action) -> [GridState; 3] {
        let mut outcomes = [from; 3];
        for (out, dir) in outcomes.iter_mut().zip(Self::drift_directions(act).iter()) {
            let target = (from.0 + DR[*dir], from.1 + DC[*dir]);
            if self.passable(target) {
                *out = target;
            }
        }
        outcomes
    }
}

impl Mdp for GridWorld {
    type Config = GridWorldConfig;
    type State = GridState;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            start: config.start,
            goal: config.goal,
            hazard: config.hazard,
            walls: config.walls.iter().copied().collect(),
            pos: config.start,
            rng: StdRng::seed_from_u64(seed as _),
        })
    }

    fn states_and_actions(&self) -> (Vec<Self::State>, Vec<Action>) {
        let mut states = Vec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if !self.walls.contains(&(r, c)) {
                    states.push((r, c));
                }
            }
        }
        (states, (0..4).map(Action).collect())
    }

    fn terminal_states(&self) -> Vec<Self::State> {
        vec![self.hazard, self.goal]
    }

    fn transition_prob(&self, state: &Self::State, act: Action, next_state: &Self::State) -> f64 {
        if !self.in_bounds(*state) || act.index() >= 4 || self.is_terminal(*state) {
            return 0.0;
        }
        let hits = self
            .drift_outcomes(*state, act)
            .iter()
            .filter(|out| *out == next_state)
            .count();
        hits as f64 / 3.0
    }

    fn reward(&self, _state: &Self::State, _act: Action, next_state: &Self::State) -> f64 {
        if *next_state == self.goal {
            1.0
        } else if *next_state == self.hazard {
            -1.0
        } else {
            0.0
        }
    }

    fn reset(&mut self) -> Step<Self::State> {
        self.pos = self.start;
        Step::new(self.pos, 0.0, false)
    }

    fn step(&mut self, act: Action) -> Result<Step<Self::State>> {
        if act.index() >= 4 {
            return Err(TabrlError::InvalidAction(act).into());
        }
        // Do nothing once the episode has ended.
        if self.is_terminal(self.pos) {
            return Ok(Step::new(self.pos, 0.0, true));
        }
        let dir = Self::drift_directions(act)[self.rng.gen_range(0..3)];
        let target = (self.pos.0 + DR[dir], self.pos.1 + DC[dir]);
        let mut reward = 0.0;
        if self.passable(target) {
            reward = self.reward(&self.pos, act, &target);
            self.pos = target;
        }
        Ok(Step::new(self.pos, reward, reward != 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> GridWorld {
        GridWorld::build(&GridWorldConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_state_and_action_sets() {
        let env = env();
        let (states, actions) = env.states_and_actions();
        assert_eq!(states.len(), 14);
        assert_eq!(actions.len(), 4);
        assert!(!states.contains(&(2, 2)));
        assert!(!states.contains(&(3, 0)));
        assert_eq!(env.terminal_states(), vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn test_transition_probabilities_sum_to_one() {
        let env = env();
        let (states, actions) = env.states_and_actions();
        let terminals = env.terminal_states();
        for s in &states {
            for a in &actions {
                let total: f64 = states.iter().map(|sp| env.transition_prob(s, *a, sp)).sum();
                if terminals.contains(s) {
                    assert_eq!(total, 0.0, "terminal {:?} has outgoing mass", s);
                } else {
                    assert!((total - 1.0).abs() < 1e-12, "{:?}/{} sums to {}", s, a, total);
                }
            }
        }
    }

    #[test]
    fn test_perpendicular_drift_from_origin() {
        let env = env();
        assert!((env.transition_prob(&(0, 0), RIGHT, &(0, 1)) - 1.0 / 3.0).abs() < 1e-12);
        assert!((env.transition_prob(&(0, 0), RIGHT, &(1, 0)) - 1.0 / 3.0).abs() < 1e-12);
        // The up-drift is blocked by the border, its mass stays on (0, 0).
        assert!((env.transition_prob(&(0, 0), RIGHT, &(0, 0)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rewards_are_attached_to_terminal_entry() {
        let env = env();
        assert_eq!(env.reward(&(3, 3), UP, &(2, 3)), 1.0);
        assert_eq!(env.reward(&(0, 3), DOWN, &(1, 3)), -1.0);
        assert_eq!(env.reward(&(0, 0), RIGHT, &(0, 1)), 0.0);
    }

    #[test]
    fn test_invalid_action_is_rejected() {
        let mut env = env();
        env.reset();
        assert!(env.step(Action(4)).is_err());
        assert!(env.step(Action(99)).is_err());
    }

    #[test]
    fn test_terminal_step_is_noop_and_reset_restarts() {
        let mut env = env();
        let start = env.reset();
        assert_eq!(start, Step::new((0, 0), 0.0, false));

        let mut last = start;
        for _ in 0..100_000 {
            last = env.step(RIGHT).unwrap();
            if last.done {
                break;
            }
        }
        assert!(last.done, "episode did not terminate");
        assert!(last.reward != 0.0);

        // Stepping a finished episode never mutates the environment again.
        for _ in 0..3 {
            let step = env.step(DOWN).unwrap();
            assert_eq!(step, Step::new(last.state, 0.0, true));
        }

        assert_eq!(env.reset(), Step::new((0, 0), 0.0, false));
    }
}
