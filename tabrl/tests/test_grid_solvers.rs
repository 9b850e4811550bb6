use anyhow::Result;
use std::collections::HashMap;
use std::convert::TryFrom;
use tabrl::{
    record::{BufferedRecorder, Record},
    util, Action, GridState, GridWorld, GridWorldConfig, Mdp, PolicyIteration,
    PolicyIterationConfig, QLearning, QLearningConfig, Solution, Solver, ValueIteration,
    ValueIterationConfig, RIGHT, UP,
};

const GAMMA: f64 = 0.9;
const EPSILON: f64 = 0.0001;

fn create_env(seed: i64) -> GridWorld {
    GridWorld::build(&GridWorldConfig::default(), seed).unwrap()
}

fn value_iteration() -> (GridWorld, Solution<GridState>) {
    let mut env = create_env(0);
    let config = ValueIterationConfig::default().gamma(GAMMA).epsilon(EPSILON);
    let solution = ValueIteration::build(config).solve(&mut env).unwrap();
    (env, solution)
}

// States whose best action beats the runner-up by at least `margin`, judged
// by backups of the given value function.
fn high_margin_actions(
    env: &GridWorld,
    values: &HashMap<GridState, f64>,
    margin: f64,
) -> Vec<(GridState, Action)> {
    let (states, actions) = env.states_and_actions();
    let mut out = Vec::new();
    for s in &states {
        let qs: Vec<f64> = actions
            .iter()
            .map(|a| util::q_value(env, &states, values, GAMMA, s, *a))
            .collect();
        let best = util::argmax(&qs);
        let second = qs
            .iter()
            .enumerate()
            .filter(|(ix, _)| *ix != best)
            .fold(f64::NEG_INFINITY, |m, (_, q)| m.max(*q));
        if qs[best] - second >= margin {
            out.push((*s, actions[best]));
        }
    }
    out
}

#[test]
fn test_value_iteration_converges_toward_goal() {
    let _ = env_logger::try_init();
    let (_, solution) = value_iteration();

    assert_eq!(solution.policy.len(), 14);

    // The only free cell adjacent to the goal is right below it; moving up
    // is the optimal (and first-max) choice there.
    assert_eq!(solution.policy.act(&(3, 3)), Some(UP));

    // Terminal values stay pinned at zero.
    assert_eq!(solution.values[&(1, 3)], 0.0);
    assert_eq!(solution.values[&(2, 3)], 0.0);
    assert!(solution.values[&(0, 0)] > 0.0);

    // The mean-value curve starts at zero and never decreases; the final
    // sweep moved the mean by less than the threshold.
    assert_eq!(solution.curve[0], 0.0);
    assert!(solution.curve.len() >= 2);
    for pair in solution.curve.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-9, "curve decreased: {:?}", pair);
    }
    let last = solution.curve[solution.curve.len() - 1];
    let prev = solution.curve[solution.curve.len() - 2];
    assert!((last - prev).abs() < EPSILON);
}

#[test]
fn test_policy_iteration_reaches_greedy_fixpoint() {
    let mut env = create_env(0);
    let config = PolicyIterationConfig::default().gamma(GAMMA).epsilon(EPSILON);
    let solution = PolicyIteration::build(config, 1).solve(&mut env).unwrap();

    // The loop only stops when an improvement pass changed nothing.
    assert_eq!(*solution.curve.last().unwrap(), 0.0);

    // Every recorded action is the argmax of the backups under the
    // converged value function.
    let (states, actions) = env.states_and_actions();
    for s in &states {
        let qs: Vec<f64> = actions
            .iter()
            .map(|a| util::q_value(&env, &states, &solution.values, GAMMA, s, *a))
            .collect();
        assert_eq!(solution.policy.act(s), Some(actions[util::argmax(&qs)]));
    }

    // Both DP solvers find the same value function.
    let (_, vi) = value_iteration();
    for s in &states {
        assert!((solution.values[s] - vi.values[s]).abs() < 0.01, "at {:?}", s);
    }
}

#[test]
fn test_q_learning_approaches_value_iteration() {
    let mut env = create_env(3);
    let solution = QLearning::build(QLearningConfig::default(), 7)
        .solve(&mut env)
        .unwrap();

    assert_eq!(solution.policy.len(), 14);
    assert_eq!(solution.curve[0], 0.0);
    assert!(*solution.curve.last().unwrap() > 0.1);

    // The cell below the goal has long converged to a positive value.
    assert!(solution.values[&(3, 3)] > 0.2);

    // Stepping right from (1, 2) runs into the hazard a third of the time;
    // no amount of estimation noise keeps that the greedy choice.
    assert_ne!(solution.policy.act(&(1, 2)), Some(RIGHT));

    // Where value iteration sees a clear-cut best action, Q-learning agrees.
    // Ties and near-ties are left to either solver.
    let (_, vi) = value_iteration();
    for (s, best) in high_margin_actions(&env, &vi.values, 0.2) {
        assert_eq!(solution.policy.act(&s), Some(best), "at {:?}", s);
    }
}

#[derive(Debug, serde::Serialize)]
struct EpisodeRecord {
    episode: usize,
    eps: f32,
    episode_return: f32,
    steps: usize,
}

impl TryFrom<&Record> for EpisodeRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            eps: record.get_scalar("eps")?,
            episode_return: record.get_scalar("episode_return")?,
            steps: record.get_scalar("steps")? as _,
        })
    }
}

#[test]
fn test_learning_curve_csv_export() -> Result<()> {
    let mut env = create_env(5);
    let mut recorder = BufferedRecorder::new();
    let config = QLearningConfig::default().num_episodes(50);
    QLearning::build(config, 5).solve_with_recorder(&mut env, &mut recorder)?;
    assert_eq!(recorder.len(), 50);

    let dir = tempdir::TempDir::new("q_learning_curve")?;
    let path = dir.path().join("curve.csv");
    let mut wtr = csv::WriterBuilder::new().from_path(&path)?;
    for record in recorder.iter() {
        wtr.serialize(EpisodeRecord::try_from(record)?)?;
    }
    wtr.flush()?;

    let mut rdr = csv::ReaderBuilder::new().from_path(&path)?;
    assert_eq!(rdr.records().count(), 50);
    Ok(())
}
