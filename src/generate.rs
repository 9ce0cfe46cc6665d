//! Random sequence pairs for tests and benchmarks.
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub type Sequence = Vec<u8>;

const ALPH: [u8; 4] = *b"ACGT";

/// A random sequence of length `n` and a copy of it with `ceil(e * n)` uniform
/// random substitutions, insertions and deletions.
///
/// An emptied copy only grows again.
pub fn generate_pair<R: Rng>(n: usize, e: f32, rng: &mut R) -> (Sequence, Sequence) {
    let symbol = |rng: &mut R| ALPH[rng.gen_range(0..ALPH.len())];
    let a = (0..n).map(|_| symbol(rng)).collect_vec();
    let num_mutations = (e * n as f32).ceil() as usize;
    let mut b = a.clone();
    for _ in 0..num_mutations {
        let op = if b.is_empty() { 1 } else { rng.gen_range(0..3) };
        match op {
            0 => {
                let i = rng.gen_range(0..b.len());
                b[i] = symbol(rng);
            }
            1 => {
                let i = rng.gen_range(0..=b.len());
                b.insert(i, symbol(rng));
            }
            _ => {
                b.remove(rng.gen_range(0..b.len()));
            }
        }
    }
    (a, b)
}

pub fn setup_sequences_with_seed(seed: u64, n: usize, e: f32) -> (Sequence, Sequence) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_pair(n, e, &mut rng)
}

// For quick testing
pub fn setup_sequences(n: usize, e: f32) -> (Sequence, Sequence) {
    setup_sequences_with_seed(31415, n, e)
}
