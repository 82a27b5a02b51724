//! Taxi trips around Porto.
//!
//! Trip files are `;` separated, without header, one trip per line:
//! `trip id;taxi id;date;longitude;latitude`.
use crate::{Error, Point, Result};
use std::f64::consts::PI;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

const EARTH_RADIUS_KM: f64 = 6371.0;
// origin of the projection
const PORTO_LONGITUDE: f64 = -8.6291;
const PORTO_LATITUDE: f64 = 41.1579;

const FIELD_DELIMITER: char = ';';

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: String,
    pub taxi_id: String,
    pub date: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}) {} {} {}",
            self.longitude, self.latitude, self.trip_id, self.taxi_id, self.date
        )
    }
}

impl Trip {
    /// Starting point of the trip in the projected plane
    pub fn position(&self) -> Point {
        to_xy(self.longitude, self.latitude)
    }
}

/// Project geographic coordinates (in degrees) on a plane where euclidean distances are
/// kilometres. Only accurate close to Porto.
pub fn to_xy(longitude: f64, latitude: f64) -> Point {
    let x = EARTH_RADIUS_KM * PI * longitude / 180.0 * (PORTO_LATITUDE / 180.0 * PI).cos();
    let y = EARTH_RADIUS_KM * PI * latitude / 180.0;
    Point::new(x, y)
}

/// Inverse of [`to_xy`], returns `(longitude, latitude)`
pub fn to_lonlat(p: &Point) -> (f64, f64) {
    let longitude = p.x() / (EARTH_RADIUS_KM * PI) * 180.0 / (PORTO_LATITUDE / 180.0 * PI).cos();
    let latitude = p.y() / (EARTH_RADIUS_KM * PI) * 180.0;
    (longitude, latitude)
}

/// The centre of the projection
pub fn porto() -> Point {
    to_xy(PORTO_LONGITUDE, PORTO_LATITUDE)
}

fn parse_line(line: &str, lineno: usize) -> Result<Trip> {
    let malformed = |reason: String| Error::Parse {
        line: lineno,
        reason,
    };
    let fields: Vec<&str> = line.trim_end().split(FIELD_DELIMITER).collect();
    if fields.len() != 5 {
        return Err(malformed(format!("expected 5 fields, got {}", fields.len())));
    }
    let coordinate = |name: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|err| malformed(format!("bad {} {:?}: {}", name, raw, err)))
    };
    Ok(Trip {
        trip_id: fields[0].to_owned(),
        taxi_id: fields[1].to_owned(),
        date: fields[2].to_owned(),
        longitude: coordinate("longitude", fields[3])?,
        latitude: coordinate("latitude", fields[4])?,
    })
}

/// Parse every trip from `reader`. Blank lines are skipped; the first malformed line fails the
/// whole parse.
pub fn parse_trips<R: BufRead>(reader: R) -> Result<Vec<Trip>> {
    let mut trips = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!(line = i + 1, "skipping blank line");
            continue;
        }
        trips.try_reserve(1)?;
        trips.push(parse_line(&line, i + 1)?);
    }
    Ok(trips)
}

pub fn load_trips<P: AsRef<Path>>(path: P) -> Result<Vec<Trip>> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading trips");
    let start = Instant::now();
    let file = File::open(path)?;
    let trips = parse_trips(BufReader::new(file))?;
    info!(trips = trips.len(), elapsed = ?start.elapsed(), "trips loaded");
    Ok(trips)
}
