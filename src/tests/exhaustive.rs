use super::*;

/// All sequences over `alphabet` of length at most `max_len`.
fn all_sequences(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut all = vec![vec![]];
    let mut layer: Vec<Vec<u8>> = vec![vec![]];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .cartesian_product(alphabet)
            .map(|(s, &c)| {
                let mut s = s.clone();
                s.push(c);
                s
            })
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}

#[test]
fn all_sequences_count() {
    // 1 + 2 + 4 + 8
    assert_eq!(all_sequences(b"ab", 3).len(), 15);
}

/// Every pair over a two letter alphabet up to length 4, under every cost table.
#[test]
fn binary_alphabet() {
    let seqs = all_sequences(b"ab", 4);
    for cm in test_cost_tables() {
        for (a, b) in seqs.iter().cartesian_product(&seqs) {
            test_pair(a, b, &cm);
        }
    }
}

/// Pairs over three letters up to length 3, with every cost in 0..=2.
#[test]
fn ternary_alphabet_all_costs() {
    let seqs = all_sequences(b"abc", 3);
    let costs = (0..4).map(|_| 0..=2 as Cost).multi_cartesian_product();
    for c in costs {
        let cm = CostTable::new(c[0], c[1], c[2], c[3]);
        for (a, b) in seqs.iter().cartesian_product(&seqs) {
            test_pair(a, b, &cm);
        }
    }
}

/// A handful of longer pairs up to length 5 over `ab`.
#[test]
fn length_five() {
    let seqs = all_sequences(b"ab", 5)
        .into_iter()
        .filter(|s| s.len() == 5)
        .collect_vec();
    let cm = CostTable::new(1, 3, 2, 2);
    for (a, b) in seqs.iter().cartesian_product(&seqs) {
        test_pair(a, b, &cm);
    }
}
