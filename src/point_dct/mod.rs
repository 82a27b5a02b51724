//! Point dictionaries: one interface, three backing structures.
//!
//! Every dictionary is built once from two parallel sequences (points and their values) and then
//! queried. Values are stored as given; pass references to keep ownership on the caller's side.
mod bst;
mod bst2d;
mod list;
#[cfg(test)]
mod tests;

pub use self::bst::BstDct;
pub use self::bst2d::Bst2dDct;
pub use self::list::ListDct;

use crate::{Error, List, Point, Result};
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Backend {
    /// Linear scans over the input sequences
    List,
    /// Binary search tree ordered lexicographically on the points
    Bst,
    /// 2-d tree
    Bst2d,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Bst => "bst",
            Self::Bst2d => "bst2d",
        };
        f.write_str(name)
    }
}

pub trait PointDct<V>: Sized {
    /// Bulk insert `points[i] -> values[i]`. Both sequences must have the same length.
    fn create(points: Vec<Point>, values: Vec<V>) -> Result<Self>;

    fn backend(&self) -> Backend;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One of the values stored at `point`, if any
    fn exact_search(&self, point: &Point) -> Option<&V>;

    /// Values of every point within `radius` of `center`, in no particular order
    fn ball_search(&self, center: &Point, radius: f64) -> Result<List<&V>>;

    /// `None` for backends without a depth, or when empty
    fn average_node_depth(&self) -> Option<f64> {
        None
    }
}

fn check_lengths(points: &[Point], values: &[impl Sized]) -> Result<()> {
    if points.len() != values.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// A dictionary whose backend is picked at runtime.
#[derive(Debug, Clone)]
pub enum AnyDct<V> {
    List(ListDct<V>),
    Bst(BstDct<V>),
    Bst2d(Bst2dDct<V>),
}

impl<V> AnyDct<V> {
    pub fn with_backend(backend: Backend, points: Vec<Point>, values: Vec<V>) -> Result<Self> {
        let start = Instant::now();
        let len = points.len();
        let dct = match backend {
            Backend::List => Self::List(ListDct::create(points, values)?),
            Backend::Bst => Self::Bst(BstDct::create(points, values)?),
            Backend::Bst2d => Self::Bst2d(Bst2dDct::create(points, values)?),
        };
        debug!(%backend, len, elapsed = ?start.elapsed(), "point dictionary created");
        Ok(dct)
    }
}

impl<V> PointDct<V> for AnyDct<V> {
    /// Defaults to the 2-d tree
    fn create(points: Vec<Point>, values: Vec<V>) -> Result<Self> {
        Self::with_backend(Backend::Bst2d, points, values)
    }

    fn backend(&self) -> Backend {
        match self {
            Self::List(d) => d.backend(),
            Self::Bst(d) => d.backend(),
            Self::Bst2d(d) => d.backend(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::List(d) => d.len(),
            Self::Bst(d) => d.len(),
            Self::Bst2d(d) => d.len(),
        }
    }

    fn exact_search(&self, point: &Point) -> Option<&V> {
        match self {
            Self::List(d) => d.exact_search(point),
            Self::Bst(d) => d.exact_search(point),
            Self::Bst2d(d) => d.exact_search(point),
        }
    }

    fn ball_search(&self, center: &Point, radius: f64) -> Result<List<&V>> {
        match self {
            Self::List(d) => d.ball_search(center, radius),
            Self::Bst(d) => d.ball_search(center, radius),
            Self::Bst2d(d) => d.ball_search(center, radius),
        }
    }

    fn average_node_depth(&self) -> Option<f64> {
        match self {
            Self::List(d) => d.average_node_depth(),
            Self::Bst(d) => d.average_node_depth(),
            Self::Bst2d(d) => d.average_node_depth(),
        }
    }
}

/// Run one ball search per query on a shared dictionary, spread over the rayon thread pool.
///
/// Fails if any of the searches fails. Results are in the order of `queries`.
pub fn par_ball_search<'a, D, V>(
    dct: &'a D,
    queries: &[Point],
    radius: f64,
) -> Result<Vec<List<&'a V>>>
where
    D: PointDct<V> + Sync,
    V: Sync + 'a,
{
    queries
        .par_iter()
        .map(|q| dct.ball_search(q, radius))
        .collect()
}
