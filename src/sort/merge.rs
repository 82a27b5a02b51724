use super::Comparisons;

/// Stable top-down merge sort with a single auxiliary buffer.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T], cmp: &Comparisons) {
    if v.len() < 2 {
        return;
    }
    let mut aux = v.to_vec();
    split(v, &mut aux, cmp);
}

fn split<T: Ord + Clone>(v: &mut [T], aux: &mut [T], cmp: &Comparisons) {
    let len = v.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (lo, hi) = v.split_at_mut(mid);
        let (alo, ahi) = aux.split_at_mut(mid);
        split(lo, alo, cmp);
        split(hi, ahi, cmp);
    }
    merge(v, mid, aux, cmp);
}

/// Merge the sorted halves `v[..mid]` and `v[mid..]`.
/// `aux` must be at least as long as `v`. Ties are taken from the left half.
pub(super) fn merge<T: Ord + Clone>(v: &mut [T], mid: usize, aux: &mut [T], cmp: &Comparisons) {
    let len = v.len();
    debug_assert!(aux.len() >= len, "{} < {}", aux.len(), len);
    let aux = &mut aux[..len];
    aux.clone_from_slice(v);

    let (mut i, mut j) = (0, mid);
    for slot in v.iter_mut() {
        let take_left = if i == mid {
            false
        } else if j == len {
            true
        } else {
            !cmp.less(&aux[j], &aux[i])
        };
        if take_left {
            *slot = aux[i].clone();
            i += 1;
        } else {
            *slot = aux[j].clone();
            j += 1;
        }
    }
}
