use super::Comparisons;

/// In-place heap sort on a max heap.
pub fn heap_sort<T: Ord>(v: &mut [T], cmp: &Comparisons) {
    let len = v.len();
    for root in (0..len / 2).rev() {
        sift_down(v, root, len, cmp);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, cmp);
    }
}

/// Restore the heap property of `v[..end]` below `root`
fn sift_down<T: Ord>(v: &mut [T], mut root: usize, end: usize, cmp: &Comparisons) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && cmp.less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !cmp.less(&v[root], &v[child]) {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}
