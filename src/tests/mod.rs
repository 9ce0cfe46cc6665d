use crate::generate::setup_sequences_with_seed;
use crate::prelude::*;
use itertools::Itertools;
use rand::{thread_rng, Rng};
use std::collections::HashMap;

mod exhaustive;

fn test_cost_tables() -> Vec<CostTable> {
    vec![
        CostTable::unit(),
        CostTable::default(),
        CostTable::new(0, 1, 1, 2),
        CostTable::new(1, 1, 1, 1),
        CostTable::new(0, 2, 3, 1),
        CostTable::new(2, 1, 1, 5),
        CostTable::new(0, 0, 0, 0),
        CostTable::new(3, 7, 2, 4),
    ]
}

/// Minimal cost by plain recursion over all alignments, memoized on the
/// remaining suffixes. Independent of `CostMatrix`.
fn brute_force_cost<T: PartialEq>(a: &[T], b: &[T], cm: &CostTable) -> Cost {
    fn rec<T: PartialEq>(
        a: &[T],
        b: &[T],
        cm: &CostTable,
        memo: &mut HashMap<(usize, usize), Cost>,
    ) -> Cost {
        let key = (a.len(), b.len());
        if let Some(&c) = memo.get(&key) {
            return c;
        }
        let c = match (a.split_first(), b.split_first()) {
            (None, None) => 0,
            (Some((_, ar)), None) => cm.delete + rec(ar, b, cm, memo),
            (None, Some((_, br))) => cm.insert + rec(a, br, cm, memo),
            (Some((x, ar)), Some((y, br))) => {
                let diag = if x == y { cm.skip } else { cm.replace };
                (diag + rec(ar, br, cm, memo))
                    .min(cm.delete + rec(ar, b, cm, memo))
                    .min(cm.insert + rec(a, br, cm, memo))
            }
        };
        memo.insert(key, c);
        c
    }
    rec(a, b, cm, &mut HashMap::new())
}

/// Check every property of a planned script for one input pair.
fn test_pair<T: PartialEq + Clone + std::fmt::Debug>(a: &[T], b: &[T], cm: &CostTable) {
    let script = plan(a, b, cm).unwrap();
    let params = format!("a {a:?}\nb {b:?}\ncosts {cm}");

    // Optimality.
    assert_eq!(script.cost(), brute_force_cost(a, b, cm), "\n{params}");
    // Cost consistency.
    assert_eq!(script.recompute_cost(cm), Ok(script.cost()), "\n{params}");
    // Round trip.
    assert_eq!(script.apply(a).as_deref(), Ok(b), "\n{params}");
    // Determinism.
    assert_eq!(plan(a, b, cm).unwrap(), script, "\n{params}");
}

#[test]
fn random_pairs() {
    let rng = &mut thread_rng();
    // Run each test on a new random seed for increased coverage over time.
    let seed = rng.gen_range(0..u64::MAX);
    let ns = [0usize, 1, 2, 3, 5, 8, 13, 20, 30];
    let es = [0.0f32, 0.05, 0.2, 0.5, 1.0];
    for (n, e) in ns.into_iter().cartesian_product(es) {
        let (a, b) = setup_sequences_with_seed(seed, n, e);
        for cm in test_cost_tables() {
            eprintln!("seed {seed} n {n} e {e:.2}");
            test_pair(&a, &b, &cm);
        }
    }
}

#[test]
fn planner_matches_free_function() {
    let planner = EditPlanner::new(CostTable::new(0, 2, 3, 1));
    let (a, b) = setup_sequences_with_seed(1, 40, 0.3);
    let script = planner.plan(&a, &b).unwrap();
    assert_eq!(script, plan(&a, &b, &planner.costs).unwrap());
    assert_eq!(planner.cost(&a, &b), Ok(script.cost()));
}
