//! Point dictionaries.
//!
//! A point dictionary maps 2D positions to values and answers exact lookups and ball queries
//! ("every value within `r` of `q`"). Three backends share the [`point_dct::PointDct`] interface:
//!
//! - [`point_dct::ListDct`]: linear scan over the input sequences
//! - [`point_dct::BstDct`]: a [`bst::Bst`] ordered lexicographically on the points
//! - [`point_dct::Bst2dDct`]: a 2-d tree ([`bst2d::Bst2d`]) splitting on x at even depths and
//!   on y at odd depths
//!
//! None of the trees rebalance, so adversarial insertion orders degrade them into lists.
//!
//! # Contracts:
//! - Coordinates must not be NaN
//!
pub mod bst;
pub mod bst2d;
pub mod error;
pub mod list;
pub mod logging;
pub mod point_dct;
pub mod sort;
pub mod taxi;

pub use error::{Error, Result};
pub use list::List;
pub use crate::point_dct::{AnyDct, Backend, PointDct};

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point([f64; 2]);

impl Deref for Point {
    type Target = [f64; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        match self.x().partial_cmp(&rhs.x())? {
            Ordering::Equal => self.y().partial_cmp(&rhs.y()),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x(), self.y())
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(!x.is_nan() && !y.is_nan(), "NaN coordinate: ({}, {})", x, y);
        Self([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Square of the euclidean distance. Compare it against `r * r` instead of taking roots.
    pub fn sqr_dist(&self, rhs: &Self) -> f64 {
        let x = self[0] - rhs[0];
        let y = self[1] - rhs[1];
        x * x + y * y
    }

    /// Lexicographic total order: x first, y breaks ties.
    ///
    /// Meant to be injected into a [`bst::Bst`] keyed by points.
    pub fn compare(&self, rhs: &Self) -> Ordering {
        self.partial_cmp(rhs).unwrap_or(Ordering::Equal)
    }
}
