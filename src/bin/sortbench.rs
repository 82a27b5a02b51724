//! CPU time and comparison counts of the sorting algorithms.
use anyhow::anyhow;
use clap::Parser;
use point_dct::logging;
use point_dct::sort::{arrays, is_sorted, Algorithm, Comparisons};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::error;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Length of the arrays
    #[arg(default_value_t = 10000)]
    length: usize,
    /// Runs averaged per input shape
    #[arg(default_value_t = 1)]
    repetitions: usize,
    /// Every algorithm when omitted
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,
    /// Share of random swaps in the almost sorted arrays
    #[arg(long, default_value_t = 0.01)]
    swap_prop: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Sorted,
    Decreasing,
    Random,
    AlmostSorted,
}

impl Shape {
    const ALL: [Self; 4] = [
        Self::Sorted,
        Self::Decreasing,
        Self::Random,
        Self::AlmostSorted,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Sorted => "Sorted",
            Self::Decreasing => "Decreasing",
            Self::Random => "Random",
            Self::AlmostSorted => "~Sorted",
        }
    }

    fn generate(self, len: usize, swap_prop: f64, rng: &mut SmallRng) -> Vec<i32> {
        match self {
            Self::Sorted => arrays::sorted(len, rng),
            Self::Decreasing => arrays::decreasing(len, rng),
            Self::Random => arrays::random(len, rng),
            Self::AlmostSorted => arrays::almost_sorted(len, swap_prop, rng),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level).map_err(|err| anyhow!(err))?;
    anyhow::ensure!(args.repetitions > 0, "at least one repetition is needed");

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let algorithms = match args.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };
    let runs = args.repetitions as f64;

    for algorithm in algorithms {
        println!(
            "{}: sorting times for arrays of size {} ({} repetitions)",
            algorithm, args.length, args.repetitions
        );
        println!("---------------------------------------------");
        println!("Array type |    time [s]    |     nb comp.");
        println!("---------------------------------------------");
        for shape in Shape::ALL {
            let mut secs = 0.0;
            let mut comparisons = 0.0;
            for _ in 0..args.repetitions {
                let mut v = shape.generate(args.length, args.swap_prop, &mut rng);
                let cmp = Comparisons::new();

                let start = Instant::now();
                algorithm.sort(&mut v, &cmp, &mut rng);
                secs += start.elapsed().as_secs_f64() / runs;
                comparisons += cmp.count() as f64 / runs;

                if !is_sorted(&v) {
                    error!(%algorithm, shape = shape.label(), "the array is not correctly sorted");
                }
            }
            println!(
                "{:<10} | {:12.6}   | {:12.1}",
                shape.label(),
                secs,
                comparisons
            );
        }
        println!("---------------------------------------------");
    }
    Ok(())
}
