//! K-nearest driver search for location-based dispatch.
//!
//! Three interchangeable strategies answer the same question (which `k`
//! drivers are closest to an order?) with different trade-offs: an
//! exhaustive scan, a uniform spatial grid with expanding ring search, and a
//! quadtree with proximity-ordered descent.
//!
//! ```rust
//! use fleetfind::{Driver, DriverSearch, GridSearch, OrderLocation};
//!
//! let drivers = vec![
//!     Driver::new(1, 10, 10),
//!     Driver::new(2, 3, 4),
//!     Driver::new(3, 80, 80),
//! ];
//! let order = OrderLocation::new(0, 0);
//!
//! let grid = GridSearch::new(10)?;
//! let nearest = grid.find_nearest(&drivers, &order, 2);
//! assert_eq!(nearest[0].driver.id(), 2);
//! # Ok::<(), fleetfind::SearchError>(())
//! ```

pub mod error;
pub mod search;
pub mod spatial;
pub mod types;

pub use error::{Result, SearchError};

pub use types::{Config, Driver, OrderLocation, SearchResult};

pub use search::{
    BruteForceSearch, DEFAULT_NEAREST_COUNT, DriverSearch, GridIndex, GridSearch, QuadTree,
    QuadTreeSearch, all_strategies,
};

pub use spatial::{distance_to_rect, euclidean_distance, rank_results};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, Driver, OrderLocation, Result, SearchError, SearchResult};

    pub use crate::{
        BruteForceSearch, DEFAULT_NEAREST_COUNT, DriverSearch, GridSearch, QuadTreeSearch,
        all_strategies,
    };

    pub use crate::spatial::euclidean_distance;

    pub use geo::{Point, Rect};
}
