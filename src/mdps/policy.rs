use super::solvers::q_table::*;
use crate::common::defs::*;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolicyAction {
    Action(Discrete),
    /// No legal action leaves the state.
    Terminal,
}

impl PolicyAction {
    pub fn action(&self) -> Option<Discrete> {
        if let Self::Action(a) = self {
            Some(*a)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(a) => write!(f, "{a}"),
            Self::Terminal => write!(f, "n"),
        }
    }
}

/// Greedy action for `s`.
///
/// Uses `>=` while scanning actions in ascending order, so among equally
/// valued actions the highest index wins. A -inf cell is still a valid pick.
/// `None` for a terminal or out of range state.
pub fn greedy_action(q: &QTable, s: Discrete) -> Option<Discrete> {
    let mut best = None;
    let mut best_q = Continous::NEG_INFINITY;
    for (a, value) in q.row(s).enumerate() {
        let Some(value) = value else {
            continue;
        };

        if value >= best_q {
            best_q = value;
            best = Some(a);
        }
    }

    best
}

/// One entry per state, in state order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    actions: Vec<PolicyAction>,
}

impl Policy {
    pub fn extract(q: &QTable) -> Self {
        let actions = (0..q.n_s())
            .map(|s| greedy_action(q, s).map_or(PolicyAction::Terminal, PolicyAction::Action))
            .collect();

        Self { actions }
    }

    pub fn actions(&self) -> &[PolicyAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn terminal_states(&self) -> Vec<Discrete> {
        self.actions
            .iter()
            .positions(PolicyAction::is_terminal)
            .collect()
    }
}

impl Index<Discrete> for Policy {
    type Output = PolicyAction;

    fn index(&self, s: Discrete) -> &PolicyAction {
        &self.actions[s]
    }
}

/// Space separated, `n` for terminal states: `1 2 3 2 n`.
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.actions.iter().join(" "))
    }
}
