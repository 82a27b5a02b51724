use super::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

const BACKENDS: [Backend; 3] = [Backend::List, Backend::Bst, Backend::Bst2d];

fn get_rand() -> SmallRng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

fn random_points(rng: &mut impl Rng, len: usize) -> Vec<Point> {
    (0..len)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn sorted_ball(dct: &impl PointDct<usize>, center: &Point, radius: f64) -> Vec<usize> {
    let mut res: Vec<usize> = dct
        .ball_search(center, radius)
        .unwrap()
        .into_iter()
        .copied()
        .collect();
    res.sort_unstable();
    res
}

#[test]
fn scenario_on_every_backend() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ];
    for backend in BACKENDS {
        let dct = AnyDct::with_backend(backend, points.clone(), vec!["a", "b", "c"]).unwrap();
        assert_eq!(dct.backend(), backend);
        assert_eq!(dct.len(), 3);

        let mut res: Vec<_> = dct
            .ball_search(&Point::new(0.0, 0.0), 1.0)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        res.sort_unstable();
        assert_eq!(res, vec!["a", "b", "c"], "{}", backend);

        let res: Vec<_> = dct
            .ball_search(&Point::new(0.0, 0.0), 0.5)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        assert_eq!(res, vec!["a"], "{}", backend);

        assert_eq!(dct.exact_search(&Point::new(0.0, 1.0)), Some(&"c"));
        assert_eq!(dct.exact_search(&Point::new(1.0, 1.0)), None);
    }
}

#[test]
fn backends_agree_with_the_linear_scan() {
    let mut rng = get_rand();
    let points = random_points(&mut rng, 2000);
    let values: Vec<usize> = (0..points.len()).collect();

    let list = ListDct::create(points.clone(), values.clone()).unwrap();
    let bst = BstDct::create(points.clone(), values.clone()).unwrap();
    let bst2d = Bst2dDct::create(points.clone(), values).unwrap();

    for _ in 0..200 {
        let center = Point::new(rng.gen_range(-0.1..1.1), rng.gen_range(-0.1..1.1));
        let radius = rng.gen_range(0.0..0.3);

        let expected = sorted_ball(&list, &center, radius);
        assert_eq!(sorted_ball(&bst, &center, radius), expected);
        assert_eq!(sorted_ball(&bst2d, &center, radius), expected);
    }

    for (i, p) in points.iter().enumerate().step_by(13) {
        assert_eq!(list.exact_search(p), Some(&i));
        assert_eq!(bst.exact_search(p), Some(&i));
        assert_eq!(bst2d.exact_search(p), Some(&i));
    }
}

#[test]
fn values_stay_owned_by_the_caller() {
    let names: Vec<String> = (0..5).map(|i| format!("trip-{}", i)).collect();
    let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();

    for backend in BACKENDS {
        let dct = AnyDct::with_backend(backend, points.clone(), names.iter().collect()).unwrap();
        assert_eq!(dct.exact_search(&Point::new(2.0, 0.0)), Some(&&names[2]));
        drop(dct);
    }
    assert_eq!(names[4], "trip-4");
}

#[test]
fn length_mismatch_is_rejected() {
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    for backend in BACKENDS {
        let err = AnyDct::with_backend(backend, points.clone(), vec![1]).unwrap_err();
        assert!(
            matches!(err, Error::LengthMismatch { points: 2, values: 1 }),
            "{}: {:?}",
            backend,
            err
        );
    }
}

#[test]
fn empty_dictionaries() {
    for backend in BACKENDS {
        let dct: AnyDct<u8> = AnyDct::with_backend(backend, vec![], vec![]).unwrap();
        assert!(dct.is_empty());
        assert_eq!(dct.exact_search(&Point::new(0.0, 0.0)), None);
        assert!(dct.ball_search(&Point::new(0.0, 0.0), 1.0).unwrap().is_empty());
        assert_eq!(dct.average_node_depth(), None);
    }
}

#[test]
fn invalid_radius_on_every_backend() {
    for backend in BACKENDS {
        let dct = AnyDct::with_backend(backend, vec![Point::new(0.0, 0.0)], vec![()]).unwrap();
        let err = dct.ball_search(&Point::new(0.0, 0.0), -0.5).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius(_)), "{}", backend);
    }
}

#[test]
fn average_depth_only_for_trees() {
    let points: Vec<Point> = (0..10).map(|i| Point::new(i as f64, i as f64)).collect();
    let values = vec![(); 10];

    let list = ListDct::create(points.clone(), values.clone()).unwrap();
    let bst = BstDct::create(points.clone(), values.clone()).unwrap();
    let bst2d = Bst2dDct::create(points, values).unwrap();

    assert_eq!(list.average_node_depth(), None);
    assert_eq!(bst.average_node_depth(), Some(4.5));
    assert_eq!(bst2d.average_node_depth(), Some(4.5));
}

#[test]
fn parallel_queries_match_sequential_ones() {
    let mut rng = get_rand();
    let points = random_points(&mut rng, 1000);
    let values: Vec<usize> = (0..points.len()).collect();
    let dct = Bst2dDct::create(points, values).unwrap();

    let queries = random_points(&mut rng, 100);
    let results = par_ball_search(&dct, &queries, 0.1).unwrap();

    assert_eq!(results.len(), queries.len());
    for (q, res) in queries.iter().zip(results) {
        let mut res: Vec<usize> = res.into_iter().copied().collect();
        res.sort_unstable();
        assert_eq!(res, sorted_ball(&dct, q, 0.1));
    }
}

#[test]
fn parallel_queries_fail_as_a_whole() {
    let dct = ListDct::create(vec![Point::new(0.0, 0.0)], vec![0]).unwrap();
    let queries = vec![Point::new(0.0, 0.0); 8];
    assert!(par_ball_search(&dct, &queries, -1.0).is_err());
}

/// The largest float below `x`
fn next_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

#[test]
fn rim_points_survive_rounding_on_every_backend() {
    let mut rng = get_rand();

    let check = |c: f64, r: f64| {
        let split = c - r;
        let points = vec![
            Point::new(split, 1000.0),
            Point::new(next_below(split), 0.0),
            Point::new(c + r, 0.0),
            Point::new(c, -r),
        ];
        let values: Vec<usize> = (0..points.len()).collect();
        let center = Point::new(c, 0.0);

        let list = ListDct::create(points.clone(), values.clone()).unwrap();
        let bst = BstDct::create(points.clone(), values.clone()).unwrap();
        let bst2d = Bst2dDct::create(points, values).unwrap();

        let expected = sorted_ball(&list, &center, r);
        assert_eq!(sorted_ball(&bst, &center, r), expected, "c = {:?}, r = {:?}", c, r);
        assert_eq!(sorted_ball(&bst2d, &center, r), expected, "c = {:?}, r = {:?}", c, r);
    };

    check(0.5440131764825007, 0.7244685697725364);
    for _ in 0..10_000 {
        check(rng.gen_range(-1.0..1.0), rng.gen_range(0.0..1.0));
    }
}
