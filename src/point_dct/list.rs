use super::{check_lengths, Backend, PointDct};
use crate::error::check_radius;
use crate::{List, Point, Result};
use tracing::{trace, warn};

/// Keeps the input sequences as they are and scans them on every query.
#[derive(Debug, Clone)]
pub struct ListDct<V> {
    points: Vec<Point>,
    values: Vec<V>,
}

impl<V> PointDct<V> for ListDct<V> {
    fn create(points: Vec<Point>, values: Vec<V>) -> Result<Self> {
        check_lengths(&points, &values)?;
        Ok(Self { points, values })
    }

    fn backend(&self) -> Backend {
        Backend::List
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn exact_search(&self, point: &Point) -> Option<&V> {
        self.points
            .iter()
            .position(|p| p == point)
            .map(|i| &self.values[i])
    }

    fn ball_search(&self, center: &Point, radius: f64) -> Result<List<&V>> {
        check_radius(radius)?;
        let sqr_radius = radius * radius;
        let mut out = List::new();
        for (p, v) in self.points.iter().zip(self.values.iter()) {
            if p.sqr_dist(center) <= sqr_radius {
                if let Err(err) = out.push_back(v) {
                    warn!(
                        backend = %Backend::List,
                        found = out.len(),
                        "ball search aborted: {}",
                        err
                    );
                    return Err(err);
                }
            }
        }
        trace!(backend = %Backend::List, %center, radius, found = out.len(), "ball search");
        Ok(out)
    }
}
