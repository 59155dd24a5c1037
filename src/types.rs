//! Core types and configuration for fleetfind.
//!
//! Drivers and order locations are plain identified points on an integer
//! plane, built on the `geo` crate's primitives and serializable with Serde.

use crate::error::{Result, SearchError};
use geo::Point;
use serde::{Deserialize, Serialize};

/// An identified driver position on the 2D plane.
///
/// Identity is the `id`; coordinates are immutable once created. Index
/// structures reference drivers by value (`Driver` is `Copy`) and never
/// mutate them.
///
/// # Examples
///
/// ```
/// use fleetfind::Driver;
///
/// let driver = Driver::new(1, 10, 10);
/// assert_eq!(driver.id(), 1);
/// assert_eq!((driver.x(), driver.y()), (10, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    id: u64,
    position: Point<i32>,
}

impl Driver {
    /// Create a new driver at the given coordinates.
    pub fn new(id: u64, x: i32, y: i32) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }

    /// The driver's identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The driver's position.
    pub fn position(&self) -> Point<i32> {
        self.position
    }

    /// The x coordinate.
    pub fn x(&self) -> i32 {
        self.position.x()
    }

    /// The y coordinate.
    pub fn y(&self) -> i32 {
        self.position.y()
    }
}

/// The location an order was placed from; the query point of a search.
///
/// Immutable, one per search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLocation {
    position: Point<i32>,
}

impl OrderLocation {
    /// Create an order location at the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }

    /// The order's position.
    pub fn position(&self) -> Point<i32> {
        self.position
    }

    /// The x coordinate.
    pub fn x(&self) -> i32 {
        self.position.x()
    }

    /// The y coordinate.
    pub fn y(&self) -> i32 {
        self.position.y()
    }
}

impl From<Point<i32>> for OrderLocation {
    fn from(position: Point<i32>) -> Self {
        Self { position }
    }
}

/// A driver paired with its Euclidean distance from the queried order.
///
/// The distance is computed fresh per search; it is never cached on the
/// driver itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched driver.
    pub driver: Driver,
    /// Euclidean distance from the order location to the driver.
    pub distance: f64,
}

impl SearchResult {
    /// Pair a driver with its distance from the order.
    pub fn new(driver: Driver, distance: f64) -> Self {
        Self { driver, distance }
    }
}

/// Search strategy configuration.
///
/// Covers the construction parameters of the grid and quadtree strategies;
/// the brute-force strategy takes none. Serializable so comparison harnesses
/// can ship configurations as JSON.
///
/// # Examples
///
/// ```
/// use fleetfind::Config;
///
/// let config = Config::default();
/// assert_eq!(config.cell_size, 10);
///
/// let json = r#"{ "cell_size": 20, "region_width": 1000, "region_height": 1000 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.region_width, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Side length of a grid cell.
    #[serde(default = "Config::default_cell_size")]
    pub cell_size: i32,

    /// Width of the quadtree coverage region, anchored at (0, 0).
    #[serde(default = "Config::default_region_width")]
    pub region_width: i32,

    /// Height of the quadtree coverage region, anchored at (0, 0).
    #[serde(default = "Config::default_region_height")]
    pub region_height: i32,
}

impl Config {
    const fn default_cell_size() -> i32 {
        10
    }

    const fn default_region_width() -> i32 {
        200
    }

    const fn default_region_height() -> i32 {
        200
    }

    /// Set the grid cell size.
    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the quadtree coverage region dimensions.
    pub fn with_region(mut self, width: i32, height: i32) -> Self {
        self.region_width = width;
        self.region_height = height;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.region_width <= 0 || self.region_height <= 0 {
            return Err(SearchError::InvalidConfig(format!(
                "coverage region must have positive dimensions, got {}x{}",
                self.region_width, self.region_height
            )));
        }
        Ok(())
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: Self::default_cell_size(),
            region_width: Self::default_region_width(),
            region_height: Self::default_region_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_accessors() {
        let driver = Driver::new(42, -3, 7);
        assert_eq!(driver.id(), 42);
        assert_eq!(driver.x(), -3);
        assert_eq!(driver.y(), 7);
        assert_eq!(driver.position(), Point::new(-3, 7));
    }

    #[test]
    fn test_order_location_from_point() {
        let order: OrderLocation = Point::new(5, 6).into();
        assert_eq!((order.x(), order.y()), (5, 6));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.region_width, 200);
        assert_eq!(config.region_height, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = Config::default().with_cell_size(20).with_region(1000, 500);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.region_width, 1000);
        assert_eq!(config.region_height, 500);
    }

    #[test]
    fn test_config_validation_rejects_non_positive() {
        assert!(Config::default().with_cell_size(0).validate().is_err());
        assert!(Config::default().with_cell_size(-5).validate().is_err());
        assert!(Config::default().with_region(0, 200).validate().is_err());
        assert!(Config::default().with_region(200, -1).validate().is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default().with_cell_size(25).with_region(400, 300);
        let json = config.to_json().unwrap();
        let restored = Config::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_json_applies_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_json_rejects_invalid() {
        assert!(Config::from_json(r#"{ "cell_size": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "region_width": -10 }"#).is_err());
    }
}
