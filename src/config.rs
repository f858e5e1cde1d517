use crate::common::{defs::*, error::*};
use crate::mdps::{policy::Policy, reward_matrix::RewardMatrix, solvers::q_learning::q_learning};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Not range checked, any real is accepted.
    pub gamma: Continous,
    pub iterations_per_path: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            gamma: 0.8,
            iterations_per_path: 100,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations_per_path == 0 {
            return Err(QLearningError::InvalidParameter(
                "iterations_per_path must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// A full training run as read from JSON. Illegal transitions are `null`:
///
/// ```json
/// { "rewards": [[null, 1], [0, null]], "paths": [[0, 1, 0]], "gamma": 0.8, "iterations_per_path": 100 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
    pub rewards: RewardMatrix,
    pub paths: Vec<Path>,
    #[serde(flatten)]
    pub config: TrainingConfig,
}

impl Problem {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn solve(&self) -> Result<Policy> {
        q_learning(
            self.rewards.clone(),
            &self.paths,
            self.config.gamma,
            self.config.iterations_per_path,
        )
    }
}
