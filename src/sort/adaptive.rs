use super::insertion::insertion_sort_from;
use super::merge::merge;
use super::Comparisons;

/// Shorter natural runs are extended to this length with insertion sort
const MIN_RUN: usize = 32;

#[derive(Debug, Clone, Copy)]
struct Run {
    start: usize,
    len: usize,
}

/// Natural merge sort: splits the input into ascending runs and merges them as they are found.
///
/// Strictly descending runs are reversed in place. Runs shorter than `MIN_RUN` are extended
/// with insertion sort. Pending runs are kept on a stack such that, from the top, `A > B + C`
/// and `B > C`, which bounds the stack depth by the logarithm of the input length.
pub fn adaptive_sort<T: Ord + Clone>(v: &mut [T], cmp: &Comparisons) {
    let len = v.len();
    if len < 2 {
        return;
    }
    let mut aux = v.to_vec();
    let mut runs: Vec<Run> = Vec::new();

    let mut start = 0;
    while start < len {
        let mut end = find_run(v, start, cmp);
        if end - start < MIN_RUN {
            let forced = (start + MIN_RUN).min(len);
            insertion_sort_from(&mut v[start..forced], end - start, cmp);
            end = forced;
        }
        runs.push(Run {
            start,
            len: end - start,
        });
        collapse(v, &mut aux, &mut runs, cmp);
        start = end;
    }

    while runs.len() > 1 {
        let at = runs.len() - 2;
        merge_at(v, &mut aux, &mut runs, at, cmp);
    }
}

/// End (exclusive) of the run starting at `start`. A descending run is reversed first.
fn find_run<T: Ord>(v: &mut [T], start: usize, cmp: &Comparisons) -> usize {
    let len = v.len();
    let mut end = start + 1;
    if end >= len {
        return len;
    }
    if cmp.less(&v[end], &v[start]) {
        // strictly descending, so reversing keeps equal items in order
        end += 1;
        while end < len && cmp.less(&v[end], &v[end - 1]) {
            end += 1;
        }
        v[start..end].reverse();
    } else {
        end += 1;
        while end < len && !cmp.less(&v[end], &v[end - 1]) {
            end += 1;
        }
    }
    end
}

fn collapse<T: Ord + Clone>(v: &mut [T], aux: &mut [T], runs: &mut Vec<Run>, cmp: &Comparisons) {
    while runs.len() > 1 {
        let n = runs.len();
        let c = runs[n - 1].len;
        let b = runs[n - 2].len;
        if n >= 3 && runs[n - 3].len <= b + c {
            // merge B with the smaller of its neighbours
            if runs[n - 3].len < c {
                merge_at(v, aux, runs, n - 3, cmp);
            } else {
                merge_at(v, aux, runs, n - 2, cmp);
            }
        } else if b <= c {
            merge_at(v, aux, runs, n - 2, cmp);
        } else {
            break;
        }
    }
}

/// Merge `runs[at]` with `runs[at + 1]`
fn merge_at<T: Ord + Clone>(
    v: &mut [T],
    aux: &mut [T],
    runs: &mut Vec<Run>,
    at: usize,
    cmp: &Comparisons,
) {
    let left = runs[at];
    let right = runs.remove(at + 1);
    debug_assert_eq!(left.start + left.len, right.start);

    let end = right.start + right.len;
    merge(&mut v[left.start..end], left.len, aux, cmp);
    runs[at].len += right.len;
}
