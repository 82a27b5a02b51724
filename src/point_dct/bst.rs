use super::{check_lengths, Backend, PointDct};
use crate::bst::{Bst, OrdFn};
use crate::error::check_radius;
use crate::{List, Point, Result};
use tracing::{trace, warn};

/// Binary search tree keyed by the lexicographic order on points.
///
/// Ball searches first collect the lexicographic range `[(q.x - r, -inf), (q.x + r, +inf)]`,
/// which contains the whole ball, then keep the points that are close enough.
#[derive(Debug, Clone)]
pub struct BstDct<V> {
    // the point is stored next to the value so that ball searches can filter on it
    tree: Bst<Point, (Point, V), OrdFn<Point>>,
}

impl<V> PointDct<V> for BstDct<V> {
    fn create(points: Vec<Point>, values: Vec<V>) -> Result<Self> {
        check_lengths(&points, &values)?;
        let mut tree = Bst::new(Point::compare as OrdFn<Point>);
        tree.extend(points.into_iter().zip(values).map(|(p, v)| (p, (p, v))))?;
        Ok(Self { tree })
    }

    fn backend(&self) -> Backend {
        Backend::Bst
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn exact_search(&self, point: &Point) -> Option<&V> {
        self.tree.search(point).map(|(_, v)| v)
    }

    fn ball_search(&self, center: &Point, radius: f64) -> Result<List<&V>> {
        check_radius(radius)?;
        // `x ± r` rounds, widen by a few ulps so points on the rim stay in range
        let slack = (center.x().abs() + radius) * 8.0 * f64::EPSILON;
        let min = Point::new(center.x() - radius - slack, f64::NEG_INFINITY);
        let max = Point::new(center.x() + radius + slack, f64::INFINITY);
        let candidates = self.tree.range_search(&min, &max)?;

        let sqr_radius = radius * radius;
        let mut out = List::new();
        for (p, v) in candidates {
            if p.sqr_dist(center) <= sqr_radius {
                if let Err(err) = out.push_back(v) {
                    warn!(
                        backend = %Backend::Bst,
                        found = out.len(),
                        "ball search aborted: {}",
                        err
                    );
                    return Err(err);
                }
            }
        }
        trace!(backend = %Backend::Bst, %center, radius, found = out.len(), "ball search");
        Ok(out)
    }

    fn average_node_depth(&self) -> Option<f64> {
        self.tree.average_node_depth()
    }
}
