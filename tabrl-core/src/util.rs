//! Utilities shared by solvers and for interaction of policies and
//! environments.
use crate::{
    record::{Record, RecordValue, Recorder},
    Action, Mdp, State, TabularPolicy,
};
use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;

/// Index of the first occurrence of the maximum value in `values`.
///
/// Ties are broken towards the lowest index, which is what makes the greedy
/// policies derived by the solvers deterministic.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (ix, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = ix;
        }
    }
    best
}

/// One Bellman backup: the expected discounted return of taking `act` in
/// `state` and following `values` afterwards.
///
/// The expectation runs over the enumerated state set; terminal successor
/// states contribute their immediate reward only, their value entry staying
/// pinned at zero.
pub fn q_value<E: Mdp>(
    env: &E,
    states: &[E::State],
    values: &HashMap<E::State, f64>,
    gamma: f64,
    state: &E::State,
    act: Action,
) -> f64 {
    let mut q = 0.0;
    for s_prime in states {
        let p = env.transition_prob(state, act, s_prime);
        if p > 0.0 {
            let v = values.get(s_prime).copied().unwrap_or(0.0);
            q += p * (env.reward(state, act, s_prime) + gamma * v);
        }
    }
    q
}

/// Mean of the state values over `states`, in the given order.
pub fn mean_value<S: State>(states: &[S], values: &HashMap<S, f64>) -> f64 {
    let sum: f64 = states
        .iter()
        .map(|s| values.get(s).copied().unwrap_or(0.0))
        .sum();
    sum / states.len() as f64
}

/// Mean over `states` of the greedy state value `max_a Q(s, a)`.
pub fn mean_greedy_value<S: State>(states: &[S], q: &HashMap<S, Vec<f64>>) -> f64 {
    let sum: f64 = states
        .iter()
        .map(|s| match q.get(s) {
            Some(row) => row.iter().fold(f64::NEG_INFINITY, |m, v| m.max(*v)),
            None => 0.0,
        })
        .sum();
    sum / states.len() as f64
}

/// Run episodes with a policy and return cumulative rewards.
pub fn eval<E: Mdp>(
    env: &mut E,
    policy: &TabularPolicy<E::State>,
    n_episodes: usize,
) -> Result<Vec<f64>> {
    let mut recorder = crate::record::NullRecorder {};
    eval_with_recorder(env, policy, n_episodes, &mut recorder)
}

/// Run episodes with a policy and recorder.
///
/// One record is written per environment transition, carrying the episode
/// index, the step index within the episode, and the obtained reward.
pub fn eval_with_recorder<E, R>(
    env: &mut E,
    policy: &TabularPolicy<E::State>,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f64>>
where
    E: Mdp,
    R: Recorder,
{
    let mut rs = Vec::new();

    for episode in 0..n_episodes {
        let mut prev = env.reset();
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy
                .act(&prev.state)
                .with_context(|| format!("policy covers no action for {:?}", prev.state))?;
            let step = env.step(act)?;
            r_total += step.reward;

            let mut record = Record::empty();
            record.insert("episode", RecordValue::Scalar(episode as f32));
            record.insert("step", RecordValue::Scalar(count_step as f32));
            record.insert("reward", RecordValue::Scalar(step.reward as f32));
            recorder.write(record);

            if step.done {
                break;
            }
            prev = step;
            count_step += 1;
        }
        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode, count_step, r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}
