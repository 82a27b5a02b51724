//! Ball search around a position over a file of taxi trips.
use anyhow::{anyhow, Context};
use clap::Parser;
use point_dct::taxi::{self, Trip};
use point_dct::{logging, AnyDct, Backend, PointDct};
use std::path::PathBuf;
use std::time::Instant;

/// Find the taxi trips that started within RADIUS km of a position.
///
/// Example: taxi -8.6291 41.1579 0.5
#[derive(Debug, Parser)]
#[command(version, about, allow_negative_numbers = true)]
struct Args {
    /// Longitude of the position, in degrees
    longitude: f64,
    /// Latitude of the position, in degrees
    latitude: f64,
    /// Radius of the search, in km
    radius: f64,
    /// Trip file: `trip id;taxi id;date;longitude;latitude` per line, no header
    #[arg(long, default_value = "taxitripsporto.csv")]
    file: PathBuf,
    #[arg(long, value_enum, default_value_t = Backend::Bst2d)]
    backend: Backend,
    /// Used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level).map_err(|err| anyhow!(err))?;

    println!(
        "Testing long={:.6}, lat={:.6}, radius={:.6}",
        args.longitude, args.latitude, args.radius
    );
    let query = taxi::to_xy(args.longitude, args.latitude);

    let trips = taxi::load_trips(&args.file)
        .with_context(|| format!("could not load trips from {}", args.file.display()))?;
    let points: Vec<_> = trips.iter().map(Trip::position).collect();

    let start = Instant::now();
    let dct = AnyDct::with_backend(args.backend, points, trips.iter().collect())
        .context("could not create the dictionary")?;
    println!(
        "Creating dictionary ({})... Done in {:.6}s",
        dct.backend(),
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let found = dct
        .ball_search(&query, args.radius)
        .context("ball search failed")?;
    println!("Searching... Done in {:.6}s", start.elapsed().as_secs_f64());
    println!("{} trips found at the position", found.len());

    if found.len() > 10 {
        println!("First 10 trips:");
    }
    for trip in found.head::<10>() {
        println!("  {}", trip);
    }
    Ok(())
}
