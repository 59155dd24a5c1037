//! Nearest-driver search strategies.
//!
//! Three interchangeable implementations of [`DriverSearch`] with different
//! asymptotic and spatial-locality trade-offs:
//!
//! - [`BruteForceSearch`]: exhaustive scan; the correctness oracle.
//! - [`GridSearch`]: uniform square-cell bucketing with expanding ring search.
//! - [`QuadTreeSearch`]: hierarchical 4-way partitioning with
//!   proximity-ordered descent and over-fetch re-ranking.
//!
//! The set of strategies is closed and known at design time; callers choose
//! one (or construct [`all_strategies`] for side-by-side comparison).

pub mod brute_force;
pub mod grid;
pub mod quadtree;

pub use brute_force::BruteForceSearch;
pub use grid::{GridIndex, GridSearch};
pub use quadtree::{QuadTree, QuadTreeSearch};

use crate::error::Result;
use crate::types::{Config, Driver, OrderLocation, SearchResult};

/// Number of nearest drivers returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_NEAREST_COUNT: usize = 5;

/// Common contract implemented by every search strategy.
///
/// Guarantees shared by all implementations:
///
/// - The returned sequence is ascending by distance from the order location,
///   with length `min(k, candidates found)`.
/// - Repeated invocations with identical inputs produce identical output
///   sequences, ordering included.
/// - `k == 0` and empty driver collections yield empty results; no input is
///   an error.
pub trait DriverSearch {
    /// Human-readable strategy label.
    fn name(&self) -> &'static str;

    /// Find the `k` drivers nearest to `order`, ascending by distance.
    fn find_nearest(
        &self,
        drivers: &[Driver],
        order: &OrderLocation,
        k: usize,
    ) -> Vec<SearchResult>;

    /// [`find_nearest`](Self::find_nearest) with [`DEFAULT_NEAREST_COUNT`].
    fn find_nearest_default(&self, drivers: &[Driver], order: &OrderLocation) -> Vec<SearchResult> {
        self.find_nearest(drivers, order, DEFAULT_NEAREST_COUNT)
    }
}

/// Construct the full set of strategies from one configuration, for
/// comparison and benchmarking harnesses.
///
/// # Examples
///
/// ```
/// use fleetfind::{all_strategies, Config, Driver, DriverSearch, OrderLocation};
///
/// let strategies = all_strategies(&Config::default()).unwrap();
/// let drivers = vec![Driver::new(1, 10, 10), Driver::new(2, 3, 4)];
/// let order = OrderLocation::new(0, 0);
///
/// for strategy in &strategies {
///     let nearest = strategy.find_nearest(&drivers, &order, 1);
///     assert_eq!(nearest[0].driver.id(), 2);
/// }
/// ```
pub fn all_strategies(config: &Config) -> Result<Vec<Box<dyn DriverSearch>>> {
    config.validate()?;
    Ok(vec![
        Box::new(BruteForceSearch::new()),
        Box::new(GridSearch::new(config.cell_size)?),
        Box::new(QuadTreeSearch::new(config.region_width, config.region_height)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strategies_labels() {
        let strategies = all_strategies(&Config::default()).unwrap();
        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["brute-force", "spatial-grid", "quadtree"]);
    }

    #[test]
    fn test_all_strategies_rejects_invalid_config() {
        let config = Config::default().with_cell_size(-1);
        assert!(all_strategies(&config).is_err());
    }

    #[test]
    fn test_find_nearest_default_count() {
        let drivers: Vec<Driver> = (0..10).map(|i| Driver::new(i, i as i32, 0)).collect();
        let order = OrderLocation::new(0, 0);
        let results = BruteForceSearch::new().find_nearest_default(&drivers, &order);
        assert_eq!(results.len(), DEFAULT_NEAREST_COUNT);
    }
}
