//! Bit-string toggling environment.
mod config;
pub use config::BitFlipConfig;

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tabrl_core::{error::TabrlError, Action, Mdp, Step};

/// Enumerates every bit string of the given length.
///
/// The strings are produced in ascending numeric order, most significant bit
/// first. The iterator is purely a function of `len` and can be restarted by
/// calling the function again.
pub fn bit_strings(len: usize) -> impl Iterator<Item = String> {
    (0..1u64 << len).map(move |mask| {
        (0..len)
            .map(|ix| {
                if mask >> (len - 1 - ix) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    })
}

fn flip(s: &str, ix: usize) -> String {
    s.char_indices()
        .map(|(i, c)| match (i == ix, c) {
            (true, '0') => '1',
            (true, _) => '0',
            (false, _) => c,
        })
        .collect()
}

/// A fixed-length bit-string toggling puzzle.
///
/// Every episode starts from the all-zeros string. Choosing action `i` flips
/// bit `i`, except that with probability 0.5 bit `i + 1` flips instead; the
/// last bit has no right neighbor and flips with certainty. Reaching one of
/// the two alternating target strings pays +1, reaching the all-ones string
/// pays -2, and all three end the episode.
pub struct BitFlip {
    len: usize,
    state: String,
    start: String,
    positive: Vec<String>,
    negative: String,
    rng: StdRng,
}

impl BitFlip {
    fn is_terminal(&self, s: &str) -> bool {
        s == self.negative || self.positive.iter().any(|t| t == s)
    }
}

impl Mdp for BitFlip {
    type Config = BitFlipConfig;
    type State = String;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let len = config.len;
        ensure!(len >= 2, "bit strings must have at least two bits");
        ensure!(len <= 24, "the state set of {} bits is not enumerable", len);
        let start: String = "0".repeat(len);
        let alternating = |first: char, second: char| -> String {
            (0..len)
                .map(|ix| if ix % 2 == 0 { first } else { second })
                .collect()
        };
        Ok(Self {
            len,
            state: start.clone(),
            start,
            positive: vec![alternating('0', '1'), alternating('1', '0')],
            negative: "1".repeat(len),
            rng: StdRng::seed_from_u64(seed as _),
        })
    }

    fn states_and_actions(&self) -> (Vec<Self::State>, Vec<Action>) {
        (
            bit_strings(self.len).collect(),
            (0..self.len).map(Action).collect(),
        )
    }

    fn terminal_states(&self) -> Vec<Self::State> {
        let mut terminals = self.positive.clone();
        terminals.push(self.negative.clone());
        terminals
    }

    fn transition_prob(&self, state: &Self::State, act: Action, next_state: &Self::State) -> f64 {
        let ix = act.index();
        if ix >= self.len || self.is_terminal(state) {
            return 0.0;
        }
        // The last bit flips with certainty, any other bit shares its mass
        // with the right neighbor.
        if ix == self.len - 1 {
            if *next_state == flip(state, ix) {
                return 1.0;
            }
        } else if *next_state == flip(state, ix) || *next_state == flip(state, ix + 1) {
            return 0.5;
        }
        0.0
    }

    fn reward(&self, _state: &Self::State, _act: Action, next_state: &Self::State) -> f64 {
        if *next_state == self.negative {
            -2.0
        } else if self.positive.contains(next_state) {
            1.0
        } else {
            0.0
        }
    }

    fn reset(&mut self) -> Step<Self::State> {
        self.state = self.start.clone();
        Step::new(self.state.clone(), 0.0, false)
    }

    fn step(&mut self, act: Action) -> Result<Step<Self::State>> {
        let ix = act.index();
        if ix >= self.len {
            return Err(TabrlError::InvalidAction(act).into());
        }
        // Do nothing once the episode has ended.
        if self.is_terminal(&self.state) {
            return Ok(Step::new(self.state.clone(), 0.0, true));
        }
        let flipped = if ix < self.len - 1 && self.rng.gen_bool(0.5) {
            ix + 1
        } else {
            ix
        };
        let next = flip(&self.state, flipped);
        let reward = self.reward(&self.state, act, &next);
        self.state = next;
        Ok(Step::new(self.state.clone(), reward, reward != 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(len: usize) -> BitFlip {
        BitFlip::build(&BitFlipConfig::default().len(len), 7).unwrap()
    }

    #[test]
    fn test_bit_strings_is_exhaustive_and_restartable() {
        let first: Vec<_> = bit_strings(3).collect();
        assert_eq!(first.len(), 8);
        assert_eq!(first[0], "000");
        assert_eq!(first[7], "111");
        let second: Vec<_> = bit_strings(3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_and_action_sets() {
        let env = env(9);
        let (states, actions) = env.states_and_actions();
        assert_eq!(states.len(), 512);
        assert_eq!(actions.len(), 9);
        assert_eq!(
            env.terminal_states(),
            vec!["010101010", "101010101", "111111111"]
        );
    }

    #[test]
    fn test_flip_forward_coupling() {
        let env = env(9);
        let s = "000000000".to_string();
        assert_eq!(env.transition_prob(&s, Action(0), &"100000000".to_string()), 0.5);
        assert_eq!(env.transition_prob(&s, Action(0), &"010000000".to_string()), 0.5);
        for other in bit_strings(9) {
            if other != "100000000" && other != "010000000" {
                assert_eq!(env.transition_prob(&s, Action(0), &other), 0.0);
            }
        }
    }

    #[test]
    fn test_last_bit_flips_with_certainty() {
        let env = env(9);
        let s = "000000000".to_string();
        assert_eq!(env.transition_prob(&s, Action(8), &"000000001".to_string()), 1.0);
    }

    #[test]
    fn test_transition_probabilities_sum_to_one() {
        let env = env(5);
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
    fn test_rewards() {
        let env = env(9);
        let s = "010101000".to_string();
        assert_eq!(env.reward(&s, Action(7), &"010101010".to_string()), 1.0);
        assert_eq!(env.reward(&s, Action(6), &"111111111".to_string()), -2.0);
        assert_eq!(env.reward(&s, Action(0), &"110101000".to_string()), 0.0);
    }

    #[test]
    fn test_invalid_action_is_rejected() {
        let mut env = env(9);
        env.reset();
        assert!(env.step(Action(9)).is_err());
    }

    #[test]
    fn test_terminal_step_is_noop_and_reset_restarts() {
        let mut env = env(4);
        assert_eq!(env.reset(), Step::new("0000".to_string(), 0.0, false));

        let mut last = Step::new("0000".to_string(), 0.0, false);
        for i in 0..1_000_000usize {
            last = env.step(Action(i % 4)).unwrap();
            if last.done {
                break;
            }
        }
        assert!(last.done, "episode did not terminate");

        for _ in 0..3 {
            let step = env.step(Action(0)).unwrap();
            assert_eq!(step, Step::new(last.state.clone(), 0.0, true));
        }

        assert_eq!(env.reset(), Step::new("0000".to_string(), 0.0, false));
    }

    #[test]
    fn test_build_rejects_degenerate_lengths() {
        assert!(BitFlip::build(&BitFlipConfig::default().len(1), 0).is_err());
        assert!(BitFlip::build(&BitFlipConfig::default().len(40), 0).is_err());
    }
}
