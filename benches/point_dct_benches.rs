use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use point_dct::bst2d::Bst2d;
use point_dct::point_dct::{par_ball_search, Bst2dDct, BstDct, ListDct};
use point_dct::{Point, PointDct};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn get_rand() -> SmallRng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

fn random_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
}

fn make_dct<D: PointDct<u32>>(rng: &mut impl Rng, size: usize) -> (D, Vec<Point>) {
    let points: Vec<Point> = (0..size).map(|_| random_point(rng)).collect();
    let dct = D::create(points.clone(), (0..size as u32).collect()).unwrap();
    (dct, points)
}

fn exact_search_in_dct<D: PointDct<u32>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!(
        "{} exact_search, all queried points are stored",
        name
    ));
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let (dct, points) = make_dct::<D>(&mut rng, size);

            b.iter(|| {
                let i = rng.gen_range(0..points.len());
                dct.exact_search(&points[i])
            });
        });
    }
    group.finish();
}

fn ball_search_in_dct<D: PointDct<u32>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{} ball_search", name));
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let (dct, _) = make_dct::<D>(&mut rng, size);

            let radius = 0.05;
            b.iter(|| {
                let q = random_point(&mut rng);
                let res = dct.ball_search(&q, radius).unwrap();
                black_box(res.len())
            });
        });
    }
    group.finish();
}

fn exact_search(c: &mut Criterion) {
    exact_search_in_dct::<ListDct<u32>>(c, "ListDct");
    exact_search_in_dct::<BstDct<u32>>(c, "BstDct");
    exact_search_in_dct::<Bst2dDct<u32>>(c, "Bst2dDct");
}

fn ball_search(c: &mut Criterion) {
    ball_search_in_dct::<ListDct<u32>>(c, "ListDct");
    ball_search_in_dct::<BstDct<u32>>(c, "BstDct");
    ball_search_in_dct::<Bst2dDct<u32>>(c, "Bst2dDct");
}

fn par_ball_search_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bst2dDct par_ball_search, 1024 queries");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let (dct, _) = make_dct::<Bst2dDct<u32>>(&mut rng, size);
            let queries: Vec<Point> = (0..1024).map(|_| random_point(&mut rng)).collect();

            b.iter(|| {
                let res = par_ball_search(&dct, &queries, 0.05).unwrap();
                black_box(res.len())
            });
        });
    }
    group.finish();
}

fn make_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bst2d make_tree");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();

            b.iter(|| {
                Bst2d::try_from_iter((0..size).map(|i| (random_point(&mut rng), i))).unwrap()
            });
        });
    }
    group.finish();
}

fn random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bst2d random_insert");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let mut tree = Bst2d::new();

            for _ in 0..size {
                tree.insert(random_point(&mut rng), 420).unwrap();
            }

            b.iter(|| tree.insert(random_point(&mut rng), 420).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    point_dct_benches,
    exact_search,
    ball_search,
    par_ball_search_batch,
    make_tree,
    random_insert,
);

criterion_main!(point_dct_benches);
