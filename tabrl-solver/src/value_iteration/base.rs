//! Value iteration solver.
use super::ValueIterationConfig;
use anyhow::Result;
use log::info;
use std::collections::HashMap;
use tabrl_core::{
    record::{Record, RecordValue::Scalar, Recorder},
    util, Mdp, Solution, Solver, TabularPolicy,
};

/// Finds an optimum policy by value iteration.
///
/// Starting from an all-zero value function, the solver repeatedly sweeps
/// the state set with the Bellman-optimality backup
/// `V(s) = max_a sum_s' P(s, a, s') * (R(s, a, s') + gamma * V(s'))`,
/// updating in place, until the largest per-state change of a sweep drops
/// below `epsilon`. The greedy policy is derived afterwards from one more
/// backup per state, ties broken towards the lowest action index.
///
/// The returned curve holds the mean state value, sampled once before the
/// first sweep and once after every sweep.
pub struct ValueIteration {
    config: ValueIterationConfig,
}

impl ValueIteration {
    /// Builds the solver.
    pub fn build(config: ValueIterationConfig) -> Self {
        Self { config }
    }
}

impl<E: Mdp> Solver<E> for ValueIteration {
    fn solve_with_recorder(
        &mut self,
        env: &mut E,
        recorder: &mut dyn Recorder,
    ) -> Result<Solution<E::State>> {
        let gamma = self.config.gamma;
        let (states, actions) = env.states_and_actions();
        let mut values: HashMap<E::State, f64> =
            states.iter().map(|s| (s.clone(), 0.0)).collect();

        let mut curve = vec![util::mean_value(&states, &values)];
        let mut sweeps = 0;
        loop {
            let mut delta: f64 = 0.0;
            for s in &states {
                let old = values[s];
                let new = actions
                    .iter()
                    .map(|a| util::q_value(env, &states, &values, gamma, s, *a))
                    .fold(f64::NEG_INFINITY, f64::max);
                values.insert(s.clone(), new);
                delta = delta.max((old - new).abs());
            }
            sweeps += 1;

            let mean = util::mean_value(&states, &values);
            curve.push(mean);
            recorder.write(Record::from_slice(&[
                ("sweep", Scalar(sweeps as f32)),
                ("mean_value", Scalar(mean as f32)),
                ("delta", Scalar(delta as f32)),
            ]));

            if delta < self.config.epsilon {
                break;
            }
        }
        info!("value iteration converged after {} sweeps", sweeps);

        let mut policy = TabularPolicy::new();
        for s in &states {
            let qs: Vec<f64> = actions
                .iter()
                .map(|a| util::q_value(env, &states, &values, gamma, s, *a))
                .collect();
            policy.insert(s.clone(), actions[util::argmax(&qs)]);
        }

        Ok(Solution {
            policy,
            values,
            curve,
        })
    }
}
