use super::Comparisons;
use rand::Rng;
use std::cmp::Ordering;
use std::mem;

/// Below this length `par_quick_sort` stops forking
const SEQUENTIAL_CUTOFF: usize = 1 << 12;

/// Quicksort with a uniformly random pivot and a three-way partition.
///
/// Items equal to the pivot are never visited again, and only the shorter side is recursed
/// into, so the stack stays logarithmic.
pub fn quick_sort<T, R>(v: &mut [T], cmp: &Comparisons, rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    let mut v = v;
    while v.len() > 1 {
        let pivot = rng.gen_range(0..v.len());
        v.swap(0, pivot);
        let (lt, gt) = partition(v, cmp);

        let (lo, hi) = split_around(mem::take(&mut v), lt, gt);
        if lo.len() < hi.len() {
            quick_sort(lo, cmp, rng);
            v = hi;
        } else {
            quick_sort(hi, cmp, rng);
            v = lo;
        }
    }
}

/// Parallel quicksort, the two sides of every partition are sorted with `rayon::join`.
///
/// Slices shorter than `SEQUENTIAL_CUTOFF` are sorted on the current thread.
pub fn par_quick_sort<T: Ord + Send>(v: &mut [T], cmp: &Comparisons) {
    if v.len() <= SEQUENTIAL_CUTOFF {
        sequential_quick_sort(v, cmp);
        return;
    }
    median_of_three(v, cmp);
    let (lt, gt) = partition(v, cmp);
    let (lo, hi) = split_around(v, lt, gt);
    rayon::join(|| par_quick_sort(lo, cmp), || par_quick_sort(hi, cmp));
}

fn sequential_quick_sort<T: Ord>(v: &mut [T], cmp: &Comparisons) {
    let mut v = v;
    while v.len() > 1 {
        median_of_three(v, cmp);
        let (lt, gt) = partition(v, cmp);

        let (lo, hi) = split_around(mem::take(&mut v), lt, gt);
        if lo.len() < hi.len() {
            sequential_quick_sort(lo, cmp);
            v = hi;
        } else {
            sequential_quick_sort(hi, cmp);
            v = lo;
        }
    }
}

/// The items below and above the pivot run `lt..gt`
fn split_around<T>(v: &mut [T], lt: usize, gt: usize) -> (&mut [T], &mut [T]) {
    let (lo, rest) = v.split_at_mut(lt);
    (lo, &mut rest[gt - lt..])
}

/// Move the median of the first, middle and last elements to the front, where `partition`
/// expects the pivot.
fn median_of_three<T: Ord>(v: &mut [T], cmp: &Comparisons) {
    let lim = v.len() - 1;

    let mut first = 0;
    let mut last = lim;
    let mut median = v.len() / 2;

    if cmp.less(&v[last], &v[median]) {
        mem::swap(&mut median, &mut last);
    }
    if cmp.less(&v[last], &v[first]) {
        mem::swap(&mut last, &mut first);
    }
    if cmp.less(&v[median], &v[first]) {
        mem::swap(&mut median, &mut first);
    }
    v.swap(median, 0);
}

/// Three-way partition around the first element.
///
/// Returns `(lt, gt)` such that `v[..lt] < pivot`, `v[lt..gt] == pivot` and `v[gt..] > pivot`.
/// Assumes that the slice is not empty
fn partition<T: Ord>(v: &mut [T], cmp: &Comparisons) -> (usize, usize) {
    debug_assert!(!v.is_empty());

    // v[lt] is always a copy of the pivot
    let mut lt = 0;
    let mut i = 1;
    let mut gt = v.len();
    while i < gt {
        match cmp.compare(&v[i], &v[lt]) {
            Ordering::Less => {
                v.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                v.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
