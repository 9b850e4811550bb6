//! Q-learning solver.
use super::QLearningConfig;
use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use tabrl_core::{
    record::{Record, RecordValue::Scalar, Recorder},
    util, Mdp, Solution, Solver, TabularPolicy,
};

/// Finds an optimum policy by tabular Q-learning.
///
/// The solver never reads the transition model. It interacts with the
/// environment through `reset` and `step` for a fixed number of episodes,
/// selecting actions epsilon-greedily and applying the one-step
/// temporal-difference update
/// `Q(s, a) += alpha * (r + gamma * max_a' Q(s', a') - Q(s, a))`
/// after every transition. Exploration decays multiplicatively at the start
/// of each episode. The greedy policy is derived once all episodes ran.
///
/// The returned curve holds the mean over all states of `max_a Q(s, a)`,
/// sampled once up front and then after every single environment
/// transition, interleaved across episodes.
pub struct QLearning {
    config: QLearningConfig,
    rng: StdRng,
}

impl QLearning {
    /// Builds the solver with a given random seed for action selection.
    pub fn build(config: QLearningConfig, seed: i64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed as _),
        }
    }
}

impl<E: Mdp> Solver<E> for QLearning {
    fn solve_with_recorder(
        &mut self,
        env: &mut E,
        recorder: &mut dyn Recorder,
    ) -> Result<Solution<E::State>> {
        let (alpha, gamma) = (self.config.alpha, self.config.gamma);
        let (states, actions) = env.states_and_actions();
        let mut q: HashMap<E::State, Vec<f64>> = states
            .iter()
            .map(|s| (s.clone(), vec![0.0; actions.len()]))
            .collect();
        let mut explorer = self.config.explorer.clone();

        let mut curve = vec![util::mean_greedy_value(&states, &q)];
        for episode in 0..self.config.num_episodes {
            explorer.decay();
            let mut prev = env.reset();
            let mut episode_return = 0.0;
            let mut count_step = 0;

            while !prev.done {
                let act = explorer.action(&q[&prev.state], &actions, &mut self.rng);
                let step = env.step(act)?;

                // The environment contract guarantees step/reset only ever
                // return states from the enumerated set.
                let best_next = q
                    .get(&step.state)
                    .with_context(|| format!("no Q row for {:?}", step.state))?
                    .iter()
                    .fold(f64::NEG_INFINITY, |m, v| m.max(*v));
                let target = step.reward + gamma * best_next;
                let row = q
                    .get_mut(&prev.state)
                    .with_context(|| format!("no Q row for {:?}", prev.state))?;
                row[act.index()] += alpha * (target - row[act.index()]);

                episode_return += step.reward;
                count_step += 1;
                prev = step;
                curve.push(util::mean_greedy_value(&states, &q));
            }

            recorder.write(Record::from_slice(&[
                ("episode", Scalar(episode as f32)),
                ("eps", Scalar(explorer.eps as f32)),
                ("episode_return", Scalar(episode_return as f32)),
                ("steps", Scalar(count_step as f32)),
            ]));
        }
        info!(
            "q-learning finished its budget of {} episodes",
            self.config.num_episodes
        );

        let mut policy = TabularPolicy::new();
        let mut values = HashMap::new();
        for s in &states {
            let qs = &q[s];
            let best = util::argmax(qs);
            policy.insert(s.clone(), actions[best]);
            values.insert(s.clone(), qs[best]);
        }

        Ok(Solution {
            policy,
            values,
            curve,
        })
    }
}
