extern crate ndarray;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod config;
pub mod mdps;

pub use common::{defs::*, error::*};
pub use config::*;
pub use mdps::{
    policy::*,
    reward_matrix::*,
    solvers::{q_learning::*, q_table::*},
    Mdp, MdpSolver,
};
