use super::Comparisons;

pub fn insertion_sort<T: Ord>(v: &mut [T], cmp: &Comparisons) {
    insertion_sort_from(v, 1, cmp);
}

/// Insertion sort assuming `v[..sorted]` is already in order
pub(super) fn insertion_sort_from<T: Ord>(v: &mut [T], sorted: usize, cmp: &Comparisons) {
    for i in sorted.max(1)..v.len() {
        let mut j = i;
        while j > 0 && cmp.less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
