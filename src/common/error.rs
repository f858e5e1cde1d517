use super::defs::*;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QLearningError>;

#[derive(Error, Debug)]
pub enum QLearningError {
    #[error("Malformed reward matrix: {0}")]
    Shape(String),

    #[error("Path {path} references state {state}, expected a state in [0, {n_s})")]
    Index {
        path: usize,
        state: Discrete,
        n_s: usize,
    },

    #[error("Path {path} takes illegal transition {s} -> {a}")]
    IllegalTransition { path: usize, s: Discrete, a: Discrete },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid problem description: {0}")]
    Config(#[from] serde_json::Error),
}
