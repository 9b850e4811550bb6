//! Policy iteration solver.
use super::PolicyIterationConfig;
use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use tabrl_core::{
    record::{Record, RecordValue::Scalar, Recorder},
    util, Mdp, Solution, Solver, TabularPolicy,
};

/// Finds an optimum policy by policy iteration.
///
/// The policy starts out uniformly random and is refined by alternating two
/// phases until an improvement pass changes no action:
///
/// 1. *Evaluation* — the value function is reset to zero and swept with the
///    Bellman-expectation backup for the current policy until the largest
///    per-state change drops below `epsilon`.
/// 2. *Improvement* — every state is greedily reassigned to the action
///    maximizing the backed-up return, ties broken towards the lowest
///    action index.
///
/// The returned curve holds one sample per improvement pass: the mean over
/// states of the absolute difference between old and new action index. The
/// solver stops only when that mean is exactly zero. The metric is a crude
/// proxy for "any action changed": a flip between two equally valued
/// actions keeps it non-zero and the loop running, which is a known
/// limitation of this stopping rule rather than a convergence guarantee.
pub struct PolicyIteration {
    config: PolicyIterationConfig,
    rng: StdRng,
}

impl PolicyIteration {
    /// Builds the solver with a given random seed for the initial policy.
    pub fn build(config: PolicyIterationConfig, seed: i64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed as _),
        }
    }

    /// Estimates the on-policy value function for the current policy.
    ///
    /// Returns the number of sweeps it took to converge.
    fn evaluate<E: Mdp>(
        &self,
        env: &E,
        states: &[E::State],
        policy: &TabularPolicy<E::State>,
        values: &mut HashMap<E::State, f64>,
    ) -> Result<usize> {
        for s in states {
            values.insert(s.clone(), 0.0);
        }
        let mut sweeps = 0;
        loop {
            let mut delta: f64 = 0.0;
            for s in states {
                let act = policy
                    .act(s)
                    .with_context(|| format!("policy covers no action for {:?}", s))?;
                let old = values[s];
                let new = util::q_value(env, states, values, self.config.gamma, s, act);
                values.insert(s.clone(), new);
                delta = delta.max((old - new).abs());
            }
            sweeps += 1;
            if delta < self.config.epsilon {
                return Ok(sweeps);
            }
        }
    }
}

impl<E: Mdp> Solver<E> for PolicyIteration {
    fn solve_with_recorder(
        &mut self,
        env: &mut E,
        recorder: &mut dyn Recorder,
    ) -> Result<Solution<E::State>> {
        let gamma = self.config.gamma;
        let (states, actions) = env.states_and_actions();
        let mut policy = TabularPolicy::random(&states, &actions, &mut self.rng);
        let mut values: HashMap<E::State, f64> = HashMap::new();

        let mut curve = Vec::new();
        let mut passes = 0;
        loop {
            let sweeps = self.evaluate(env, &states, &policy, &mut values)?;

            // Greedy improvement, accumulating |old - new| over action
            // indices.
            let mut total_change = 0;
            for s in &states {
                let old = policy
                    .act(s)
                    .with_context(|| format!("policy covers no action for {:?}", s))?;
                let qs: Vec<f64> = actions
                    .iter()
                    .map(|a| util::q_value(env, &states, &values, gamma, s, *a))
                    .collect();
                let new = actions[util::argmax(&qs)];
                policy.insert(s.clone(), new);
                total_change += old.index().abs_diff(new.index());
            }
            passes += 1;

            let mean_change = total_change as f64 / states.len() as f64;
            curve.push(mean_change);
            recorder.write(Record::from_slice(&[
                ("pass", Scalar(passes as f32)),
                ("mean_policy_change", Scalar(mean_change as f32)),
                ("eval_sweeps", Scalar(sweeps as f32)),
            ]));

            if total_change == 0 {
                break;
            }
        }
        info!("policy iteration converged after {} improvement passes", passes);

        Ok(Solution {
            policy,
            values,
            curve,
        })
    }
}
