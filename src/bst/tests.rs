use super::*;
use crate::Point;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

fn get_rand() -> SmallRng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

#[test]
fn insert_and_search() {
    let mut tree = Bst::ordered();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(k, k * 10).unwrap();
    }

    assert_eq!(tree.len(), 7);
    for k in [5, 3, 8, 1, 4, 7, 9] {
        assert_eq!(tree.search(&k), Some(&(k * 10)));
    }
    assert_eq!(tree.search(&6), None);
    assert!(!tree.contains_key(&0));
}

#[test]
fn empty_tree() {
    let tree: Bst<i32, i32> = Bst::ordered();

    assert_eq!(tree.search(&1), None);
    assert!(tree.range_search(&0, &10).unwrap().is_empty());
    assert_eq!(tree.average_node_depth(), None);
}

#[test]
fn duplicates_go_left() {
    let mut tree = Bst::ordered();
    tree.insert(1, "first").unwrap();
    tree.insert(1, "second").unwrap();
    tree.insert(1, "third").unwrap();

    assert_eq!(tree.len(), 3);
    // the root is the earliest duplicate and search stops at the first match
    assert_eq!(tree.search(&1), Some(&"first"));
    // each duplicate hangs off the left of the previous one
    assert_eq!(tree.average_node_depth(), Some(1.0));

    let all: Vec<_> = tree.range_search(&1, &1).unwrap().into_iter().collect();
    assert_eq!(all.len(), 3);
}

#[test]
fn injected_comparator() {
    // reverse order
    let mut tree = Bst::new(|a: &i32, b: &i32| b.cmp(a));
    for k in 0..10 {
        tree.insert(k, k).unwrap();
    }

    // ascending in the comparator's order, i.e. descending numerically
    let res: Vec<_> = tree.range_search(&7, &3).unwrap().into_iter().copied().collect();
    assert_eq!(res, vec![7, 6, 5, 4, 3]);
}

#[test]
fn range_search_matches_sorted_scan() {
    let mut rng = get_rand();

    let mut tree = Bst::ordered();
    let mut reference = BTreeMap::new();
    for i in 0..1000 {
        let k: u32 = rng.gen_range(0..100_000);
        if reference.insert(k, i).is_none() {
            tree.insert(k, i).unwrap();
        }
    }

    for _ in 0..100 {
        let a = rng.gen_range(0..100_000);
        let b = rng.gen_range(0..100_000);
        let (min, max) = if a <= b { (a, b) } else { (b, a) };

        let expected: Vec<_> = reference.range(min..=max).map(|(_, v)| *v).collect();
        let actual: Vec<_> = tree
            .range_search(&min, &max)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        assert_eq!(actual, expected, "[{}, {}]", min, max);
    }
}

#[test]
fn inverted_range_is_a_caller_error() {
    let mut tree = Bst::ordered();
    tree.insert(1, ()).unwrap();

    let err = tree.range_search(&5, &2).unwrap_err();
    assert!(matches!(err, Error::InvertedRange));
    assert!(err.is_precondition());
}

#[test]
fn average_depth_of_a_skewed_tree() {
    let n = 64;
    let mut tree = Bst::ordered();
    for i in 0..n {
        tree.insert(i, ()).unwrap();
    }
    let expected = (0..n).sum::<usize>() as f64 / n as f64;
    assert_eq!(tree.average_node_depth(), Some(expected));
}

#[test]
fn points_as_keys() {
    let mut tree = Bst::new(Point::compare);
    tree.insert(Point::new(1.0, 5.0), 'a').unwrap();
    tree.insert(Point::new(0.0, 9.0), 'b').unwrap();
    tree.insert(Point::new(1.0, 2.0), 'c').unwrap();
    tree.insert(Point::new(2.0, 0.0), 'd').unwrap();

    assert_eq!(tree.search(&Point::new(1.0, 2.0)), Some(&'c'));

    let res: String = tree
        .range_search(&Point::new(0.0, 0.0), &Point::new(1.0, 9.0))
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(res, "bca");
}

#[test]
fn clear_empties_the_tree() {
    let mut tree = Bst::ordered();
    tree.extend((0..10).map(|i| (i, i * 2))).unwrap();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.search(&4), None);
    assert!(tree.range_search(&0, &10).unwrap().is_empty());
}
