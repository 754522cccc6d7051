use lacuna::{solve, GapSolver, Params};
use proptest::prelude::*;

/// Straight-line model of the solver: a plain vector for the sequence
/// and a linear scan from zero for each minimum. Hopeless for real
/// input sizes, trivially correct for small ones.
fn reference(p: &Params) -> (u64, Vec<u64>) {
    let mut seq = Vec::new();
    let mut x = p.a;
    seq.push(x);
    for _ in 1..p.k {
        x = ((p.b as u128 * x as u128 + p.c as u128) % p.r as u128) as u64;
        seq.push(x);
    }
    let mut minima = Vec::new();
    while (seq.len() as u64) < p.n {
        let window = &seq[seq.len() - p.k as usize..];
        let mut m = 0u64;
        while window.contains(&m) {
            m += 1;
        }
        minima.push(m);
        seq.push(m);
    }
    (*seq.last().unwrap(), minima)
}

fn small_params() -> impl Strategy<Value = Params> {
    // small moduli on purpose: they force duplicate generator output
    (1u64..=48, 0u64..=1000, 0u64..=1000, 0u64..=1000, 1u64..=40)
        .prop_flat_map(|(n, a, b, c, r)| (Just(n), 1u64..=n, Just(a), Just(b), Just(c), Just(r)))
        .prop_map(|(n, k, a, b, c, r)| Params { n, k, a, b, c, r })
}

proptest! {
    #[test]
    fn matches_reference_model(p in small_params()) {
        let (expected, _) = reference(&p);
        prop_assert_eq!(solve(&p).unwrap(), expected);
    }

    #[test]
    fn every_step_appends_the_reference_minimum(p in small_params()) {
        let (_, expected_minima) = reference(&p);
        let mut solver = GapSolver::new(&p);
        let mut minima = Vec::new();
        for _ in p.k..p.n {
            minima.push(solver.step().unwrap());
            prop_assert_eq!(solver.blocked().len(), p.k);
        }
        prop_assert_eq!(minima, expected_minima);
    }

    #[test]
    fn generate_phase_invariants(p in small_params()) {
        let solver = GapSolver::new(&p);
        prop_assert_eq!(solver.sequence().len() as u64, p.k);
        prop_assert_eq!(solver.blocked().len(), p.k);
    }

    #[test]
    fn answers_are_deterministic(p in small_params()) {
        prop_assert_eq!(solve(&p).unwrap(), solve(&p).unwrap());
    }
}
