//! 2-d tree.
//!
//! A binary search tree over points where the compared coordinate alternates with the depth:
//! nodes at even depths split on `x`, nodes at odd depths split on `y`. The tree is never
//! rebalanced.

use crate::error::check_radius;
use crate::{List, Point, Result};
use std::vec;
use tracing::{trace, warn};

type NodeId = usize;

// nodes are pushed in insertion order, so the first one is always the root
const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<V> {
    key: Point,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// The coordinate compared at `depth`
#[inline]
fn axis(depth: usize) -> usize {
    depth & 1
}

/// Point -> value dictionary backed by a 2-d tree.
///
/// Nodes live in an arena and refer to their children by index. Every node has exactly one
/// parent and nothing is ever removed, so `len` is both the arena size and the number of
/// reachable nodes.
///
/// Duplicate points are allowed. A point whose coordinate on the split dimension equals the
/// node's goes to the right subtree.
#[derive(Debug, Clone)]
pub struct Bst2d<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for Bst2d<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Bst2d<V> {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(ROOT)
        }
    }

    pub fn try_from_iter<It>(it: It) -> Result<Self>
    where
        It: IntoIterator<Item = (Point, V)>,
    {
        let mut res = Self::new();
        res.extend(it)?;
        Ok(res)
    }

    /// Insert the items in order. Stops at the first failure; items inserted before it stay in
    /// the tree.
    pub fn extend<It>(&mut self, it: It) -> Result<()>
    where
        It: IntoIterator<Item = (Point, V)>,
    {
        for (p, v) in it {
            self.insert(p, v)?;
        }
        Ok(())
    }

    /// Insert a new leaf. On allocation failure the tree is left untouched.
    pub fn insert(&mut self, key: Point, value: V) -> Result<()> {
        // reserve before linking so that a failure can not leave a dangling child index
        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();

        if let Some(mut current) = self.root() {
            let mut depth = 0;
            loop {
                let dim = axis(depth);
                let node = &mut self.nodes[current];
                let slot = if key[dim] >= node.key[dim] {
                    &mut node.right
                } else {
                    &mut node.left
                };
                match *slot {
                    Some(next) => {
                        current = next;
                        depth += 1;
                    }
                    None => {
                        *slot = Some(id);
                        break;
                    }
                }
            }
        }

        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
        });
        Ok(())
    }

    /// Returns one of the values stored at `key`, if any
    pub fn search<'a>(&'a self, key: &Point) -> Option<&'a V> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.key == *key {
                return Some(&node.value);
            }
            // must branch exactly like `insert`, ties included
            let dim = axis(depth);
            current = if key[dim] >= node.key[dim] {
                node.right
            } else {
                node.left
            };
            depth += 1;
        }
        None
    }

    pub fn contains_key(&self, key: &Point) -> bool {
        self.search(key).is_some()
    }

    /// Lazily visit every entry within `radius` of `center`, in no particular order.
    pub fn ball_iter<'a>(&'a self, center: &Point, radius: f64) -> Result<BallIter<'a, V>> {
        check_radius(radius)?;
        Ok(BallIter {
            tree: self,
            center: *center,
            sqr_radius: radius * radius,
            stack: self.root().map(|root| (root, 0)).into_iter().collect(),
        })
    }

    /// Collect the values of every entry within `radius` of `center`.
    ///
    /// Fails as a whole if the result can not be allocated; no partial result is returned.
    pub fn ball_search<'a>(&'a self, center: &Point, radius: f64) -> Result<List<&'a V>> {
        let mut out = List::new();
        for (_, value) in self.ball_iter(center, radius)? {
            if let Err(err) = out.push_back(value) {
                warn!(found = out.len(), "ball search aborted: {}", err);
                return Err(err);
            }
        }
        trace!(%center, radius, found = out.len(), "ball search");
        Ok(out)
    }

    /// Mean number of edges between a node and the root, `None` for an empty tree
    pub fn average_node_depth(&self) -> Option<f64> {
        let root = self.root()?;
        let mut total = 0usize;
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            total += depth;
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        Some(total as f64 / self.nodes.len() as f64)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &V)> + '_ {
        self.nodes.iter().map(|n| (&n.key, &n.value))
    }
}

/// Hands every stored entry back to the caller, consuming the tree.
impl<V> IntoIterator for Bst2d<V> {
    type Item = (Point, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes.into_iter(),
        }
    }
}

#[derive(Debug)]
pub struct IntoIter<V> {
    nodes: vec::IntoIter<Node<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Point, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|n| (n.key, n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Depth first walk over the nodes whose subtree may intersect the query ball.
#[derive(Debug)]
pub struct BallIter<'a, V> {
    tree: &'a Bst2d<V>,
    center: Point,
    sqr_radius: f64,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, V> Iterator for BallIter<'a, V> {
    type Item = (&'a Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let node = &self.tree.nodes[id];
            let dim = axis(depth);
            let split = node.key[dim];

            // left holds coordinates < split, right holds coordinates >= split; the squared
            // gap is a lower bound of the squared distance to anything across the split, even
            // after rounding
            let gap = self.center[dim] - split;
            let near_split = gap * gap <= self.sqr_radius;
            let visit_left = gap < 0.0 || near_split;
            let visit_right = gap >= 0.0 || near_split;

            // push right first so the left subtree is walked first
            if visit_right {
                self.stack.extend(node.right.map(|child| (child, depth + 1)));
            }
            if visit_left {
                self.stack.extend(node.left.map(|child| (child, depth + 1)));
            }

            if self.center.sqr_dist(&node.key) <= self.sqr_radius {
                return Some((&node.key, &node.value));
            }
        }
        None
    }
}
