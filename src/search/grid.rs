//! Uniform spatial grid search with expanding ring scan.

use crate::error::{Result, SearchError};
use crate::search::DriverSearch;
use crate::spatial::{distance_to_order, rank_results};
use crate::types::{Config, Driver, OrderLocation, SearchResult};
use rustc_hash::{FxHashMap, FxHashSet};

/// Default side length of a grid cell.
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Widest ring scanned around the query cell before the search gives up and
/// returns what it has.
pub const MAX_RING_RADIUS: i32 = 10;

/// A uniform grid of square cells bucketing drivers by position.
///
/// Cell keys are the floor division of a driver's coordinates by the cell
/// size, so negative coordinates land in their own cells instead of folding
/// into cell zero.
///
/// The index has an explicit build/clear lifecycle: [`GridSearch`] rebuilds
/// one per query, but callers issuing repeated queries over a static fleet
/// can hold a `GridIndex` and query it directly.
///
/// # Examples
///
/// ```
/// use fleetfind::{Driver, GridIndex, OrderLocation};
///
/// let drivers = vec![Driver::new(1, 3, 4), Driver::new(2, 95, 95)];
/// let index = GridIndex::build(10, &drivers).unwrap();
///
/// let nearest = index.nearest(&OrderLocation::new(0, 0), 1);
/// assert_eq!(nearest[0].driver.id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GridIndex {
    cell_size: i32,
    buckets: FxHashMap<(i32, i32), Vec<Driver>>,
    len: usize,
}

impl GridIndex {
    /// Create an empty index.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if `cell_size` is not positive.
    pub fn new(cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        Ok(Self::empty(cell_size))
    }

    fn empty(cell_size: i32) -> Self {
        Self {
            cell_size,
            buckets: FxHashMap::default(),
            len: 0,
        }
    }

    /// Create an index and bucket all of `drivers` into it.
    pub fn build(cell_size: i32, drivers: &[Driver]) -> Result<Self> {
        let mut index = Self::new(cell_size)?;
        for driver in drivers {
            index.insert(*driver);
        }
        Ok(index)
    }

    /// Bucket a single driver.
    pub fn insert(&mut self, driver: Driver) {
        let key = self.cell_key(driver.x(), driver.y());
        self.buckets.entry(key).or_default().push(driver);
        self.len += 1;
    }

    /// Drop all buckets, keeping the cell size.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    /// Number of indexed drivers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no drivers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn cell_key(&self, x: i32, y: i32) -> (i32, i32) {
        (x.div_euclid(self.cell_size), y.div_euclid(self.cell_size))
    }

    /// Find the `k` drivers nearest to `order`, ascending by distance.
    ///
    /// Scans square rings of cells outward from the order's own cell and
    /// stops as soon as at least `k` candidates have been collected or the
    /// ring bound is reached. Stopping early trades exactness for locality:
    /// a marginally closer driver can sit in a cell just outside the last
    /// scanned ring. If the bound is exhausted first, fewer than `k` results
    /// are returned.
    pub fn nearest(&self, order: &OrderLocation, k: usize) -> Vec<SearchResult> {
        let (center_x, center_y) = self.cell_key(order.x(), order.y());
        let mut seen = FxHashSet::default();
        let mut candidates = Vec::new();

        let mut radius = 0;
        while candidates.len() < k && radius <= MAX_RING_RADIUS {
            self.collect_ring(center_x, center_y, radius, order, &mut seen, &mut candidates);
            radius += 1;
        }

        if candidates.len() < k {
            log::debug!(
                "ring scan exhausted at radius {MAX_RING_RADIUS} with {} of {k} requested drivers",
                candidates.len()
            );
        }

        rank_results(candidates, k)
    }

    /// Visit every cell on the square ring at `radius` (Chebyshev distance
    /// from the center cell) in a fixed order, collecting candidates.
    fn collect_ring(
        &self,
        center_x: i32,
        center_y: i32,
        radius: i32,
        order: &OrderLocation,
        seen: &mut FxHashSet<u64>,
        candidates: &mut Vec<SearchResult>,
    ) {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx.abs().max(dy.abs()) != radius {
                    continue;
                }
                let Some(bucket) = self.buckets.get(&(center_x + dx, center_y + dy)) else {
                    continue;
                };
                for driver in bucket {
                    if seen.insert(driver.id()) {
                        let distance = distance_to_order(order, driver.position());
                        candidates.push(SearchResult::new(*driver, distance));
                    }
                }
            }
        }
    }
}

/// Grid-bucketing search strategy.
///
/// Rebuilds a [`GridIndex`] from the driver collection on every call, then
/// runs the expanding ring scan. Approximate under very uneven density; see
/// [`GridIndex::nearest`].
#[derive(Debug, Clone, Copy)]
pub struct GridSearch {
    cell_size: i32,
}

impl GridSearch {
    /// Create the strategy.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if `cell_size` is not positive.
    pub fn new(cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        Ok(Self { cell_size })
    }

    /// Create the strategy from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.cell_size)
    }

    /// The configured cell size.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }
}

impl Default for GridSearch {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl DriverSearch for GridSearch {
    fn name(&self) -> &'static str {
        "spatial-grid"
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

        // Cell size was validated when the strategy was constructed.
        let mut index = GridIndex::empty(self.cell_size);
        for driver in drivers {
            index.insert(*driver);
        }

        index.nearest(order, k)
    }
}
