use super::q_table::*;
use crate::common::{defs::*, error::*};
use crate::config::TrainingConfig;
use crate::mdps::{policy::*, reward_matrix::RewardMatrix, Mdp, MdpSolver};
use itertools::Itertools;
use std::rc::Rc;
use tracing::{debug, info, trace};

/// Checks every path before the table is touched, so a bad path never leaves
/// a half trained table behind.
pub fn validate_paths(mdp: &dyn Mdp, paths: &[Path]) -> Result<()> {
    for (p, path) in paths.iter().enumerate() {
        if path.is_empty() {
            return Err(QLearningError::InvalidParameter(format!("path {p} is empty")));
        }

        if let Some(&state) = path.iter().find(|&&s| s >= mdp.n_s()) {
            return Err(QLearningError::Index {
                path: p,
                state,
                n_s: mdp.n_s(),
            });
        }

        if let Some((s, a)) = path
            .iter()
            .copied()
            .tuple_windows()
            .find(|&(s, a)| mdp.reward(s, a).is_none())
        {
            return Err(QLearningError::IllegalTransition { path: p, s, a });
        }
    }

    Ok(())
}

/// One sweep along `path`: Q(s, a) := r(s, a) + gamma * max_a' Q(a, a').
///
/// Backups are applied in path order against the live table, so a later
/// transition sees the values written earlier in the same sweep.
fn sweep(
    q: &mut QTable,
    mdp: &dyn Mdp,
    p: usize,
    path: &[Discrete],
    gamma: Continous,
) -> Result<usize> {
    let mut backups = 0;
    for (s, a) in path.iter().copied().tuple_windows() {
        let r = mdp
            .reward(s, a)
            .ok_or(QLearningError::IllegalTransition { path: p, s, a })?;

        let max_q = q.max_q(a);
        if max_q == Continous::NEG_INFINITY {
            debug!(s, a, "successor is a dead end");
        }

        // With gamma 0 the successor contributes nothing, dead end or not.
        let value = if gamma == 0. { r } else { r + gamma * max_q };
        trace!(s, a, value, "backup");
        if !q.set(s, a, value) {
            return Err(QLearningError::IllegalTransition { path: p, s, a });
        }
        backups += 1;
    }

    Ok(backups)
}

/// Replays each path `iterations_per_path` times, one path after the other in
/// input order. Returns the number of backups applied.
pub fn train(
    q: &mut QTable,
    mdp: &dyn Mdp,
    paths: &[Path],
    config: &TrainingConfig,
) -> Result<usize> {
    config.validate()?;
    if (q.n_s(), q.n_a()) != (mdp.n_s(), mdp.n_a()) {
        return Err(QLearningError::Shape(format!(
            "Q-table is {}x{} but the MDP is {}x{}",
            q.n_s(),
            q.n_a(),
            mdp.n_s(),
            mdp.n_a()
        )));
    }
    validate_paths(mdp, paths)?;

    let mut backups = 0;
    for (p, path) in paths.iter().enumerate() {
        for _ in 0..config.iterations_per_path {
            backups += sweep(q, mdp, p, path, config.gamma)?;
        }
        debug!(
            path = p,
            len = path.len(),
            iterations = config.iterations_per_path,
            "path replayed"
        );
    }

    Ok(backups)
}

/// Off-policy Q-learning against trainer supplied paths.
/// No environment, no exploration: the paths are the experience.
pub struct QLearning {
    mdp: Rc<dyn Mdp>,
    config: TrainingConfig,
    q: QTable,
}

impl QLearning {
    pub fn new(mdp: Rc<dyn Mdp>, config: TrainingConfig) -> Self {
        let q = QTable::new(mdp.as_ref());

        Self { mdp, config, q }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    pub fn policy(&self) -> Policy {
        Policy::extract(&self.q)
    }
}

impl MdpSolver for QLearning {
    fn v_star(&self, s: Discrete) -> Option<Continous> {
        self.q.get(s, self.pi_star(s)?)
    }

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        self.q.get(s, a)
    }

    fn pi_star(&self, s: Discrete) -> Option<Discrete> {
        greedy_action(&self.q, s)
    }

    fn exec(&mut self, paths: &[Path]) -> Result<usize> {
        train(&mut self.q, self.mdp.as_ref(), paths, &self.config)
    }
}

/// Initialize, train and extract in one go.
pub fn q_learning(
    rewards: RewardMatrix,
    paths: &[Path],
    gamma: Continous,
    iterations_per_path: usize,
) -> Result<Policy> {
    let n_s = rewards.n_s();
    let config = TrainingConfig {
        gamma,
        iterations_per_path,
    };

    let mut solver = QLearning::new(Rc::new(rewards), config);
    let backups = solver.exec(paths)?;
    let policy = solver.policy();
    info!(
        n_s,
        paths = paths.len(),
        backups,
        terminal = policy.terminal_states().len(),
        "q-learning finished"
    );

    Ok(policy)
}
