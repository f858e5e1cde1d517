use crate::common::defs::*;
use crate::mdps::Mdp;
use ndarray::Array2;

/// Q-values shaped like the MDP's reward matrix. A cell is defined exactly when
/// the corresponding transition is legal, and stays that way for the life of
/// the table.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    q: Array2<Option<Continous>>,
}

impl QTable {
    /// Every legal cell starts at 0.
    pub fn new(mdp: &dyn Mdp) -> Self {
        let q = Array2::from_shape_fn((mdp.n_s(), mdp.n_a()), |(s, a)| {
            mdp.reward(s, a).map(|_| 0.)
        });

        Self { q }
    }

    pub fn n_s(&self) -> usize {
        self.q.nrows()
    }

    pub fn n_a(&self) -> usize {
        self.q.ncols()
    }

    pub fn get(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        self.q.get((s, a)).copied().flatten()
    }

    /// Cells of `s` in action order; empty when `s` is out of range.
    pub fn row(&self, s: Discrete) -> impl Iterator<Item = Option<Continous>> + '_ {
        self.q
            .outer_iter()
            .nth(s)
            .into_iter()
            .flat_map(|row| row.into_iter().copied())
    }

    /// max_a' Q(s, a') over the defined cells of `s`; -inf for a dead end.
    /// NaN cells never win, same as a plain `>` scan.
    pub fn max_q(&self, s: Discrete) -> Continous {
        self.row(s)
            .flatten()
            .fold(Continous::NEG_INFINITY, |max, q| if q > max { q } else { max })
    }

    /// Overwrites a defined cell. Undefined cells are left alone so the
    /// defined/undefined partition cannot change.
    pub(crate) fn set(&mut self, s: Discrete, a: Discrete, value: Continous) -> bool {
        match self.q.get_mut((s, a)) {
            Some(Some(q)) => {
                *q = value;
                true
            }
            _ => false,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<Continous>>> {
        self.q.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
