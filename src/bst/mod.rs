//! Binary search tree ordered by an injected comparator.
#[cfg(test)]
mod tests;

use crate::{Error, List, Result};
use std::cmp::Ordering;
use tracing::{trace, warn};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Comparator used by [`Bst::ordered`]
pub type OrdFn<K> = fn(&K, &K) -> Ordering;

/// Key -> value dictionary backed by an unbalanced binary search tree.
///
/// Keys in a left subtree compare `<=` to their ancestor, keys in a right subtree compare `>`;
/// duplicates therefore go left and `search` returns the earliest inserted of them.
///
/// The comparator must be a total order and stays fixed for the lifetime of the tree.
#[derive(Clone)]
pub struct Bst<K, V, C = OrdFn<K>> {
    nodes: Vec<Node<K, V>>,
    compare: C,
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, C> std::fmt::Debug for Bst<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bst")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl<K: Ord, V> Bst<K, V> {
    /// Tree ordered by `K`'s own `Ord`
    pub fn ordered() -> Self {
        Self::new(K::cmp)
    }
}

enum Visit {
    Explore(NodeId),
    Emit(NodeId),
}

impl<K, V, C> Bst<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            nodes: vec![],
            compare,
        }
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

    pub fn extend<It>(&mut self, it: It) -> Result<()>
    where
        It: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in it {
            self.insert(k, v)?;
        }
        Ok(())
    }

    /// Insert a new leaf. On allocation failure the tree is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();

        if let Some(mut current) = self.root() {
            loop {
                let node = &mut self.nodes[current];
                let slot = match (self.compare)(&key, &node.key) {
                    Ordering::Greater => &mut node.right,
                    Ordering::Less | Ordering::Equal => &mut node.left,
                };
                match *slot {
                    Some(next) => current = next,
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

    pub fn search<'a>(&'a self, key: &K) -> Option<&'a V> {
        let mut current = self.root();
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match (self.compare)(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
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

    /// Values of every key in `[min, max]`, in increasing key order.
    ///
    /// Returns [`Error::InvertedRange`] if `min > max`. Fails as a whole if the result can not be
    /// allocated.
    pub fn range_search<'a>(&'a self, min: &K, max: &K) -> Result<List<&'a V>> {
        if (self.compare)(min, max) == Ordering::Greater {
            return Err(Error::InvertedRange);
        }

        let mut out = List::new();
        let mut stack: Vec<Visit> = self.root().map(Visit::Explore).into_iter().collect();
        while let Some(visit) = stack.pop() {
            let id = match visit {
                Visit::Emit(id) => {
                    if let Err(err) = out.push_back(&self.nodes[id].value) {
                        warn!(found = out.len(), "range search aborted: {}", err);
                        return Err(err);
                    }
                    continue;
                }
                Visit::Explore(id) => id,
            };
            let node = &self.nodes[id];
            if (self.compare)(&node.key, min) == Ordering::Less {
                stack.extend(node.right.map(Visit::Explore));
            } else if (self.compare)(&node.key, max) == Ordering::Greater {
                stack.extend(node.left.map(Visit::Explore));
            } else {
                // in-order: left subtree, the node, then the right subtree
                stack.extend(node.right.map(Visit::Explore));
                stack.push(Visit::Emit(id));
                stack.extend(node.left.map(Visit::Explore));
            }
        }
        trace!(found = out.len(), "range search");
        Ok(out)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.nodes.iter().map(|n| (&n.key, &n.value))
    }
}
