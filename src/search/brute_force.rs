//! Exhaustive nearest-driver search.

use crate::search::DriverSearch;
use crate::spatial::{distance_to_order, rank_results};
use crate::types::{Driver, OrderLocation, SearchResult};

/// Exhaustive scan over every driver.
///
/// Computes the distance from the order to every driver, ranks, and keeps the
/// `k` nearest. O(n log n) per query with no index to build, and always
/// exact; the other strategies are cross-checked against it.
///
/// Drivers at equal distance keep their relative input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSearch;

impl BruteForceSearch {
    /// Create the strategy. Takes no configuration.
    pub fn new() -> Self {
        Self
    }
}

impl DriverSearch for BruteForceSearch {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn find_nearest(
        &self,
        drivers: &[Driver],
        order: &OrderLocation,
        k: usize,
    ) -> Vec<SearchResult> {
        if k == 0 {
            return Vec::new();
        }

        let results = drivers
            .iter()
            .map(|driver| SearchResult::new(*driver, distance_to_order(order, driver.position())))
            .collect();

        rank_results(results, k)
    }
}
