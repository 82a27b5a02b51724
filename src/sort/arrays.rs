//! Input generators for the sorting benchmarks.
use rand::Rng;

// sorted arrays start at a random offset below this
const MAX_START: i32 = 1001;
// random arrays hold values in [0, UPPER_BOUND)
const UPPER_BOUND: i32 = 1_000_001;

pub fn sorted<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i32> {
    let shift = rng.gen_range(0..MAX_START);
    (0..len as i32).map(|i| shift + i).collect()
}

pub fn decreasing<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i32> {
    let mut v = sorted(len, rng);
    v.reverse();
    v
}

pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..UPPER_BOUND)).collect()
}

/// A sorted array where `prop * len` random pairs of positions were swapped
pub fn almost_sorted<R: Rng + ?Sized>(len: usize, prop: f64, rng: &mut R) -> Vec<i32> {
    let mut v = sorted(len, rng);
    if len == 0 {
        return v;
    }
    let swaps = (len as f64 * prop) as usize;
    for _ in 0..swaps {
        let i = rng.gen_range(0..len);
        let j = rng.gen_range(0..len);
        v.swap(i, j);
    }
    v
}
