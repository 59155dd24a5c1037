//! Quadtree search over a bounded coverage region.

use crate::error::{Result, SearchError};
use crate::search::DriverSearch;
use crate::spatial::{distance_to_order, distance_to_rect, rank_results, rect_contains_half_open};
use crate::types::{Config, Driver, OrderLocation, SearchResult};
use geo::{Rect, coord};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Drivers a leaf holds before it subdivides.
pub const MAX_DRIVERS_PER_NODE: usize = 4;

/// Multiple of `k` candidates fetched from the tree before exact re-ranking.
///
/// Quadrant visitation is ordered by boundary distance, which is not exact
/// proximity ordering of individual drivers; over-fetching compensates.
pub const OVERFETCH_FACTOR: usize = 3;

/// A node holds either up to [`MAX_DRIVERS_PER_NODE`] drivers directly
/// (leaf) or no drivers plus exactly four children (internal). Children are
/// owned; nothing points back up.
#[derive(Debug, Clone)]
struct Node {
    bounds: Rect<i32>,
    drivers: SmallVec<[Driver; MAX_DRIVERS_PER_NODE]>,
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn leaf(bounds: Rect<i32>) -> Self {
        Self {
            bounds,
            drivers: SmallVec::new(),
            children: None,
        }
    }

    fn insert(&mut self, driver: Driver) {
        if !rect_contains_half_open(&self.bounds, driver.position()) {
            return;
        }

        if self.children.is_none() {
            if self.drivers.len() < MAX_DRIVERS_PER_NODE {
                self.drivers.push(driver);
                return;
            }
            // A single integer cell cannot split further; let the leaf
            // overflow past its inline capacity instead.
            if self.bounds.width() <= 1 && self.bounds.height() <= 1 {
                self.drivers.push(driver);
                return;
            }
            self.subdivide();
        }

        if let Some(children) = self.children.as_mut() {
            // Children tile the bounds disjointly; exactly one accepts.
            for child in children.iter_mut() {
                child.insert(driver);
            }
        }
    }

    /// Split into four quadrants tiling the bounds exactly (the east and
    /// south quadrants absorb the odd remainder) and redistribute the
    /// drivers held here into them. North is the low-y half.
    fn subdivide(&mut self) {
        let min = self.bounds.min();
        let max = self.bounds.max();
        let mid_x = min.x + self.bounds.width() / 2;
        let mid_y = min.y + self.bounds.height() / 2;

        let mut children = Box::new([
            // NW
            Node::leaf(Rect::new(
                coord! { x: min.x, y: min.y },
                coord! { x: mid_x, y: mid_y },
            )),
            // NE
            Node::leaf(Rect::new(
                coord! { x: mid_x, y: min.y },
                coord! { x: max.x, y: mid_y },
            )),
            // SW
            Node::leaf(Rect::new(
                coord! { x: min.x, y: mid_y },
                coord! { x: mid_x, y: max.y },
            )),
            // SE
            Node::leaf(Rect::new(
                coord! { x: mid_x, y: mid_y },
                coord! { x: max.x, y: max.y },
            )),
        ]);

        for driver in self.drivers.drain(..) {
            for child in children.iter_mut() {
                child.insert(driver);
            }
        }

        self.children = Some(children);
    }

    /// Collect up to `max_candidates` drivers, visiting the quadrant nearest
    /// the order first.
    ///
    /// No subtree is spatially pruned: work is bounded by the candidate cap
    /// and the visit order alone, and the final exact re-ranking happens in
    /// the caller. The cap is checked before descending into a node, so the
    /// accumulator can overshoot by at most one node's drivers.
    fn collect_nearest(&self, order: &OrderLocation, max_candidates: usize, out: &mut Vec<Driver>) {
        if out.len() >= max_candidates {
            return;
        }

        out.extend(self.drivers.iter().copied());

        if let Some(children) = &self.children {
            let mut by_distance: [(f64, &Node); 4] = [
                (distance_to_rect(order.position(), &children[0].bounds), &children[0]),
                (distance_to_rect(order.position(), &children[1].bounds), &children[1]),
                (distance_to_rect(order.position(), &children[2].bounds), &children[2]),
                (distance_to_rect(order.position(), &children[3].bounds), &children[3]),
            ];
            // Stable: quadrants at equal boundary distance keep NW/NE/SW/SE
            // order, so traversal is deterministic.
            by_distance.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

            for (_, child) in by_distance {
                child.collect_nearest(order, max_candidates, out);
            }
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
}

/// A quadtree over a fixed rectangular coverage region anchored at `(0, 0)`.
///
/// Drivers outside the coverage region are silently dropped on insertion; a
/// caller cross-checking against the unbounded strategies must account for
/// the asymmetry. The tree supports no removal or relocation: when the
/// underlying fleet changes, [`clear`](QuadTree::clear) and re-insert.
///
/// # Examples
///
/// ```
/// use fleetfind::{Driver, OrderLocation, QuadTree};
///
/// let mut tree = QuadTree::new(200, 200).unwrap();
/// assert!(tree.insert(Driver::new(1, 10, 10)));
/// assert!(!tree.insert(Driver::new(2, 500, 500))); // outside coverage
///
/// let candidates = tree.nearest_candidates(&OrderLocation::new(0, 0), 5);
/// assert_eq!(candidates.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    len: usize,
}

impl QuadTree {
    /// Create an empty tree covering `[0, width) × [0, height)`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "coverage region must have positive dimensions, got {width}x{height}"
            )));
        }
        Ok(Self::from_bounds(Rect::new(
            coord! { x: 0, y: 0 },
            coord! { x: width, y: height },
        )))
    }

    fn from_bounds(bounds: Rect<i32>) -> Self {
        Self {
            root: Node::leaf(bounds),
            len: 0,
        }
    }

    /// The coverage region.
    pub fn bounds(&self) -> Rect<i32> {
        self.root.bounds
    }

    /// Number of drivers held by the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no drivers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a driver. Returns `false` when the driver lies outside the
    /// coverage region and was dropped.
    pub fn insert(&mut self, driver: Driver) -> bool {
        if !rect_contains_half_open(&self.root.bounds, driver.position()) {
            log::debug!(
                "driver {} at ({}, {}) outside coverage region, dropped",
                driver.id(),
                driver.x(),
                driver.y()
            );
            return false;
        }
        self.root.insert(driver);
        self.len += 1;
        true
    }

    /// Reset to an empty leaf covering the same region.
    pub fn clear(&mut self) {
        self.root = Node::leaf(self.root.bounds);
        self.len = 0;
    }

    /// Collect up to `max_candidates` drivers by proximity-ordered descent.
    ///
    /// The returned drivers are candidates, not final results: the visit
    /// order approximates proximity at quadrant granularity, so callers must
    /// compute exact distances, rank, and truncate.
    pub fn nearest_candidates(&self, order: &OrderLocation, max_candidates: usize) -> Vec<Driver> {
        let mut out = Vec::new();
        if max_candidates > 0 {
            self.root.collect_nearest(order, max_candidates, &mut out);
        }
        out
    }
}

/// Quadtree search strategy.
///
/// Rebuilds the tree from the driver collection on every call, over-fetches
/// [`OVERFETCH_FACTOR`]` * k` candidates, then re-ranks by exact distance.
#[derive(Debug, Clone, Copy)]
pub struct QuadTreeSearch {
    region: Rect<i32>,
}

impl QuadTreeSearch {
    /// Create the strategy with a coverage region of `width × height`
    /// anchored at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "coverage region must have positive dimensions, got {width}x{height}"
            )));
        }
        Ok(Self {
            region: Rect::new(coord! { x: 0, y: 0 }, coord! { x: width, y: height }),
        })
    }

    /// Create the strategy from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.region_width, config.region_height)
    }

    /// The configured coverage region.
    pub fn region(&self) -> Rect<i32> {
        self.region
    }
}

impl DriverSearch for QuadTreeSearch {
    fn name(&self) -> &'static str {
        "quadtree"
    }

    fn find_nearest(
        &self,
        drivers: &[Driver],
        order: &OrderLocation,
        k: usize,
    ) -> Vec<SearchResult> {
        if k == 0 || drivers.is_empty() {
            return Vec::new();
        }

        // Region was validated when the strategy was constructed.
        let mut tree = QuadTree::from_bounds(self.region);
        for driver in drivers {
            tree.insert(*driver);
        }

        let candidates = tree.nearest_candidates(order, k.saturating_mul(OVERFETCH_FACTOR));
        let results = candidates
            .into_iter()
            .map(|driver| SearchResult::new(driver, distance_to_order(order, driver.position())))
            .collect();

        rank_results(results, k)
    }
}
