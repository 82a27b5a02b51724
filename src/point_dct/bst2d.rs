use super::{check_lengths, Backend, PointDct};
use crate::bst2d::Bst2d;
use crate::{List, Point, Result};

#[derive(Debug, Clone)]
pub struct Bst2dDct<V> {
    tree: Bst2d<V>,
}

impl<V> PointDct<V> for Bst2dDct<V> {
    fn create(points: Vec<Point>, values: Vec<V>) -> Result<Self> {
        check_lengths(&points, &values)?;
        let tree = Bst2d::try_from_iter(points.into_iter().zip(values))?;
        Ok(Self { tree })
    }

    fn backend(&self) -> Backend {
        Backend::Bst2d
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn exact_search(&self, point: &Point) -> Option<&V> {
        self.tree.search(point)
    }

    fn ball_search(&self, center: &Point, radius: f64) -> Result<List<&V>> {
        self.tree.ball_search(center, radius)
    }

    fn average_node_depth(&self) -> Option<f64> {
        self.tree.average_node_depth()
    }
}
