//! Comparison sorts, instrumented with an explicit comparison counter.
//!
//! Every algorithm takes a [`Comparisons`] and routes each element comparison through it, so
//! different algorithms can be compared on the number of comparisons as well as on time.
mod adaptive;
pub mod arrays;
mod heap;
mod insertion;
mod merge;
mod quick;

pub use adaptive::adaptive_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::{par_quick_sort, quick_sort};

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Counts comparisons. Shared by reference; safe to use from the threads of
/// [`par_quick_sort`].
#[derive(Debug, Default)]
pub struct Comparisons(AtomicU64);

impl Comparisons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.0.load(AtomicOrdering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, AtomicOrdering::Relaxed);
    }

    #[inline]
    pub fn compare<T: Ord + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.0.fetch_add(1, AtomicOrdering::Relaxed);
        a.cmp(b)
    }

    #[inline]
    pub fn less<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Insertion,
    Merge,
    Quick,
    ParQuick,
    Heap,
    Adaptive,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::ParQuick => "par-quick",
            Self::Heap => "heap",
            Self::Adaptive => "adaptive",
        };
        f.write_str(name)
    }
}

impl Algorithm {
    pub const ALL: [Self; 6] = [
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::ParQuick,
        Self::Heap,
        Self::Adaptive,
    ];

    /// `rng` picks the pivots of [`quick_sort`] and is ignored by the other algorithms.
    pub fn sort<T, R>(self, v: &mut [T], cmp: &Comparisons, rng: &mut R)
    where
        T: Ord + Clone + Send,
        R: Rng + ?Sized,
    {
        match self {
            Self::Insertion => insertion_sort(v, cmp),
            Self::Merge => merge_sort(v, cmp),
            Self::Quick => quick_sort(v, cmp, rng),
            Self::ParQuick => par_quick_sort(v, cmp),
            Self::Heap => heap_sort(v, cmp),
            Self::Adaptive => adaptive_sort(v, cmp),
        }
    }
}

/// Uncounted check, for verifying results
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
