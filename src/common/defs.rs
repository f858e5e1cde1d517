/// Index into the finite state space. Actions index the same space: taking
/// action `a` moves the learner to state `a`.
pub type Discrete = usize;

pub type Continous = f64;

/// One training trajectory, the ordered states a trainer walks the learner through.
pub type Path = Vec<Discrete>;
