use super::Mdp;
use crate::common::{defs::*, error::*};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

type Rows = Vec<Vec<Option<Continous>>>;

/// Square reward matrix. `r[[s, a]]` is `None` exactly when moving from `s`
/// to `a` is illegal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct RewardMatrix {
    r: Array2<Option<Continous>>,
}

impl RewardMatrix {
    pub fn from_rows(rows: Rows) -> Result<Self> {
        let n_s = rows.len();
        if n_s == 0 {
            return Err(QLearningError::Shape("no states".to_string()));
        }

        for (s, row) in rows.iter().enumerate() {
            if row.len() != n_s {
                return Err(QLearningError::Shape(format!(
                    "row {s} has {} actions, expected {n_s}",
                    row.len()
                )));
            }

            if let Some(a) = row.iter().position(|r| r.is_some_and(|r| !r.is_finite())) {
                return Err(QLearningError::InvalidParameter(format!(
                    "reward for {s} -> {a} is not finite"
                )));
            }
        }

        let r = Array2::from_shape_vec((n_s, n_s), rows.into_iter().flatten().collect())
            .map_err(|e| QLearningError::Shape(e.to_string()))?;

        Ok(Self { r })
    }

    pub fn is_legal(&self, s: Discrete, a: Discrete) -> bool {
        self.reward(s, a).is_some()
    }

    pub fn legal_actions(&self, s: Discrete) -> impl Iterator<Item = Discrete> + '_ {
        (0..self.n_a()).filter(move |&a| self.is_legal(s, a))
    }

    pub fn is_terminal(&self, s: Discrete) -> bool {
        self.legal_actions(s).next().is_none()
    }
}

impl TryFrom<Rows> for RewardMatrix {
    type Error = QLearningError;

    fn try_from(rows: Rows) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<RewardMatrix> for Rows {
    fn from(rm: RewardMatrix) -> Self {
        rm.r.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Mdp for RewardMatrix {
    fn n_s(&self) -> usize {
        self.r.nrows()
    }

    fn n_a(&self) -> usize {
        self.r.ncols()
    }

    fn reward(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        self.r.get((s, a)).copied().flatten()
    }
}
