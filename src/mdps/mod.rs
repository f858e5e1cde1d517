pub mod policy;
pub mod reward_matrix;
pub mod solvers;

use crate::common::{defs::*, error::*};

/// Deterministic Markov Decision Process - Sutton & Barto 2018.
///
/// Taking action `a` from any state lands in state `a`, so the only thing left
/// to describe is which transitions are allowed and what they pay.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    /// `None` when `s -> a` is not allowed.
    fn reward(&self, s: Discrete, a: Discrete) -> Option<Continous>;
}

pub trait MdpSolver {
    fn v_star(&self, s: Discrete) -> Option<Continous>;

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous>;

    fn pi_star(&self, s: Discrete) -> Option<Discrete>;

    /// Trains against the given paths, returning the number of backups applied.
    fn exec(&mut self, paths: &[Path]) -> Result<usize>;
}
