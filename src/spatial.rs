//! Shared geometry helpers used by every search strategy.
//!
//! Keeping distance computation and result ranking in one place guarantees
//! that all strategies agree on tie-breaking: ranking uses a stable sort, so
//! drivers at equal distance keep the order in which they were collected.

use crate::types::{OrderLocation, SearchResult};
use geo::{Point, Rect};
use std::cmp::Ordering;

/// Euclidean distance between two integer points.
///
/// Coordinates are widened to `f64` before subtracting so extreme values
/// cannot overflow `i32`.
pub fn euclidean_distance(a: Point<i32>, b: Point<i32>) -> f64 {
    let dx = f64::from(a.x()) - f64::from(b.x());
    let dy = f64::from(a.y()) - f64::from(b.y());
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance from a point to the closest point of an axis-aligned
/// rectangle. Zero when the point lies inside the rectangle.
pub fn distance_to_rect(point: Point<i32>, rect: &Rect<i32>) -> f64 {
    let dx = if point.x() < rect.min().x {
        f64::from(rect.min().x) - f64::from(point.x())
    } else if point.x() > rect.max().x {
        f64::from(point.x()) - f64::from(rect.max().x)
    } else {
        0.0
    };

    let dy = if point.y() < rect.min().y {
        f64::from(rect.min().y) - f64::from(point.y())
    } else if point.y() > rect.max().y {
        f64::from(point.y()) - f64::from(rect.max().y)
    } else {
        0.0
    };

    (dx * dx + dy * dy).sqrt()
}

/// Membership in the half-open region `[min.x, max.x) × [min.y, max.y)`.
///
/// Half-open on the max edges so that adjacent rectangles sharing an edge
/// claim each point exactly once.
pub fn rect_contains_half_open(rect: &Rect<i32>, point: Point<i32>) -> bool {
    point.x() >= rect.min().x
        && point.x() < rect.max().x
        && point.y() >= rect.min().y
        && point.y() < rect.max().y
}

/// Rank candidates by distance and keep the `k` nearest.
///
/// The sort is stable: candidates at equal distance keep their relative
/// collection order.
pub fn rank_results(mut results: Vec<SearchResult>, k: usize) -> Vec<SearchResult> {
    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(k);
    results
}

/// Distance from an order location to a driver position.
pub(crate) fn distance_to_order(order: &OrderLocation, position: Point<i32>) -> f64 {
    euclidean_distance(order.position(), position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Driver;
    use geo::coord;

    #[test]
    fn test_euclidean_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(euclidean_distance(a, b), 5.0);
        assert_eq!(euclidean_distance(b, a), 5.0);
        assert_eq!(euclidean_distance(a, a), 0.0);
    }

    #[test]
    fn test_euclidean_distance_extreme_coordinates() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        let expected = f64::from(i32::MAX) - f64::from(i32::MIN);
        assert_eq!(euclidean_distance(a, b), expected);
    }

    #[test]
    fn test_distance_to_rect_inside_is_zero() {
        let rect = Rect::new(coord! { x: 0, y: 0 }, coord! { x: 10, y: 10 });
        assert_eq!(distance_to_rect(Point::new(5, 5), &rect), 0.0);
        assert_eq!(distance_to_rect(Point::new(0, 0), &rect), 0.0);
        assert_eq!(distance_to_rect(Point::new(10, 10), &rect), 0.0);
    }

    #[test]
    fn test_distance_to_rect_outside() {
        let rect = Rect::new(coord! { x: 0, y: 0 }, coord! { x: 10, y: 10 });
        // Straight out along one axis.
        assert_eq!(distance_to_rect(Point::new(15, 5), &rect), 5.0);
        assert_eq!(distance_to_rect(Point::new(5, -7), &rect), 7.0);
        // Diagonal from a corner.
        assert_eq!(distance_to_rect(Point::new(13, 14), &rect), 5.0);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::new(coord! { x: 0, y: 0 }, coord! { x: 10, y: 10 });
        assert!(rect_contains_half_open(&rect, Point::new(0, 0)));
        assert!(rect_contains_half_open(&rect, Point::new(9, 9)));
        assert!(!rect_contains_half_open(&rect, Point::new(10, 5)));
        assert!(!rect_contains_half_open(&rect, Point::new(5, 10)));
        assert!(!rect_contains_half_open(&rect, Point::new(-1, 5)));
    }

    #[test]
    fn test_rank_results_sorts_and_truncates() {
        let results = vec![
            SearchResult::new(Driver::new(1, 0, 0), 9.0),
            SearchResult::new(Driver::new(2, 0, 0), 1.0),
            SearchResult::new(Driver::new(3, 0, 0), 5.0),
        ];
        let ranked = rank_results(results, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].driver.id(), 2);
        assert_eq!(ranked[1].driver.id(), 3);
    }

    #[test]
    fn test_rank_results_stable_on_ties() {
        let results = vec![
            SearchResult::new(Driver::new(10, 0, 0), 4.0),
            SearchResult::new(Driver::new(11, 0, 0), 4.0),
            SearchResult::new(Driver::new(12, 0, 0), 2.0),
        ];
        let ranked = rank_results(results, 3);
        let ids: Vec<u64> = ranked.iter().map(|r| r.driver.id()).collect();
        assert_eq!(ids, vec![12, 10, 11]);
    }
}
