//! CPU time of the point dictionaries on random points of the unit square.
use anyhow::{anyhow, Context};
use clap::Parser;
use point_dct::point_dct::par_ball_search;
use point_dct::{logging, AnyDct, Backend, Point, PointDct};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::warn;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of points in the dictionary
    #[arg(default_value_t = 1000)]
    npoints: usize,
    /// Number of searches of each kind
    #[arg(default_value_t = 1000)]
    nsearch: usize,
    /// Radius of the ball searches
    #[arg(default_value_t = 0.1)]
    radius: f64,
    #[arg(long, value_enum, default_value_t = Backend::Bst2d)]
    backend: Backend,
    /// Seed of the point generator, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Threads used by the parallel ball searches, all cores when omitted
    #[arg(long)]
    threads: Option<usize>,
    /// Used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn random_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level).map_err(|err| anyhow!(err))?;
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("could not configure the thread pool")?;
    }
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    anyhow::ensure!(args.npoints > 0, "the dictionary needs at least one point");

    let ntotal = args.npoints + args.nsearch;
    println!("Preparation:");
    println!("   Generating {} points...", ntotal);
    let all: Vec<Point> = (0..ntotal).map(|_| random_point(&mut rng)).collect();
    let (stored, queries) = all.split_at(args.npoints);

    println!(
        "   Creation of the dictionary ({}, {} points)...",
        args.backend, args.npoints
    );
    let start = Instant::now();
    let dct = AnyDct::with_backend(args.backend, stored.to_vec(), (0..args.npoints).collect())?;
    println!("   Done in {:.6}s", start.elapsed().as_secs_f64());

    println!("\nTesting exact searches:");
    println!("   {} positive searches...", args.nsearch);
    let mut errors = 0;
    let start = Instant::now();
    for _ in 0..args.nsearch {
        let i = rng.gen_range(0..args.npoints);
        match dct.exact_search(&stored[i]) {
            Some(&found) if found == i => {}
            Some(&found) => {
                warn!(expected = i, found, "associated data is wrong");
                errors += 1;
            }
            None => {
                warn!(point = %stored[i], "positive point was not found");
                errors += 1;
            }
        }
    }
    println!("   Done in {:.6}s", start.elapsed().as_secs_f64());

    println!("   {} negative searches...", args.nsearch);
    let start = Instant::now();
    for _ in 0..args.nsearch {
        // outside the unit square, so never stored
        let p = Point::new(rng.gen_range(-1.0..0.0), rng.gen_range(1.0..2.0));
        if let Some(found) = dct.exact_search(&p) {
            warn!(point = %p, found, "negative point was found");
            errors += 1;
        }
    }
    println!("   Done in {:.6}s", start.elapsed().as_secs_f64());
    if errors > 0 {
        println!("   Warning: there were {} errors", errors);
    }

    println!("\nTesting ball searches:");
    println!(
        "   {} ball searches of radius {}...",
        queries.len(),
        args.radius
    );
    let start = Instant::now();
    let mut total = 0;
    for q in queries {
        total += dct.ball_search(q, args.radius)?.len();
    }
    println!("   Done in {:.6}s", start.elapsed().as_secs_f64());
    if !queries.is_empty() {
        println!(
            "   Average list size: {:.6}",
            total as f64 / queries.len() as f64
        );
    }

    println!(
        "   {} parallel ball searches on {} threads...",
        queries.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();
    let results = par_ball_search(&dct, queries, args.radius)?;
    println!("   Done in {:.6}s", start.elapsed().as_secs_f64());
    let par_total: usize = results.iter().map(|l| l.len()).sum();
    if par_total != total {
        warn!(sequential = total, parallel = par_total, "result sizes differ");
    }

    if let Some(depth) = dct.average_node_depth() {
        println!("\nAverage node depth: {:.6}", depth);
    }
    Ok(())
}
