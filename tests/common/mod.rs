use qlearner::*;
use rand::prelude::*;

/// State 4 has no legal action.
#[allow(dead_code)]
pub fn five_states() -> RewardMatrix {
    RewardMatrix::from_rows(vec![
        vec![None, Some(0.), None, Some(0.), None],
        vec![Some(0.), None, Some(10.), None, Some(100.)],
        vec![None, Some(0.), None, Some(0.), None],
        vec![Some(0.), None, Some(0.), None, None],
        vec![None, None, None, None, None],
    ])
    .unwrap()
}

#[allow(dead_code)]
pub fn two_states() -> RewardMatrix {
    RewardMatrix::from_rows(vec![vec![None, Some(1.)], vec![Some(0.), None]]).unwrap()
}

/// Random sparse MDP plus paths that only take legal transitions.
#[allow(dead_code)]
pub fn random_problem(rng: &mut StdRng) -> (RewardMatrix, Vec<Path>) {
    let n_s = rng.gen_range(2..8);
    let rows = (0..n_s)
        .map(|_| {
            (0..n_s)
                .map(|_| rng.gen_bool(0.5).then(|| rng.gen_range(-10.0..10.0)))
                .collect()
        })
        .collect();
    let rm = RewardMatrix::from_rows(rows).unwrap();

    let paths = (0..rng.gen_range(1..4))
        .map(|_| {
            let mut s = rng.gen_range(0..n_s);
            let mut path = vec![s];
            for _ in 0..rng.gen_range(0..10) {
                let legal = rm.legal_actions(s).collect::<Vec<_>>();
                match legal.choose(rng) {
                    Some(&a) => {
                        path.push(a);
                        s = a;
                    }
                    None => break,
                }
            }
            path
        })
        .collect();

    (rm, paths)
}

#[allow(dead_code)]
pub fn defined_cells(q: &QTable) -> Vec<Vec<bool>> {
    q.to_rows()
        .iter()
        .map(|row| row.iter().map(Option::is_some).collect())
        .collect()
}

#[allow(dead_code)]
pub fn legal_cells(rm: &RewardMatrix) -> Vec<Vec<bool>> {
    (0..rm.n_s())
        .map(|s| (0..rm.n_a()).map(|a| rm.is_legal(s, a)).collect())
        .collect()
}

#[allow(dead_code)]
pub fn bits(q: &QTable) -> Vec<Vec<Option<u64>>> {
    q.to_rows()
        .iter()
        .map(|row| row.iter().map(|v| v.map(f64::to_bits)).collect())
        .collect()
}
