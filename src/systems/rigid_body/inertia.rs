//! Rotational inertia proxy - rasterized polygon area
//!
//! Counts the integer cells inside the polygon's bounding box that pass the
//! point-in-polygon test. Runs at assembly time only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::geometry::Polygon;
use super::vec2::Vec2;

/// Interior cell count, saturated to `u16::MAX`.
pub fn estimate_inertia(polygon: &Polygon) -> u16 {
    if !polygon.is_valid() {
        return 0;
    }
    let Some(bounds) = polygon.bounds() else {
        return 0;
    };

    let column = |x: i32| -> u64 {
        (bounds.min_y..bounds.max_y)
            .filter(|&y| polygon.contains(Vec2::new(x as f32, y as f32)))
            .count() as u64
    };

    #[cfg(feature = "parallel")]
    let area: u64 = (bounds.min_x..bounds.max_x).into_par_iter().map(column).sum();

    #[cfg(not(feature = "parallel"))]
    let area: u64 = (bounds.min_x..bounds.max_x).map(column).sum();

    area.min(u16::MAX as u64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_area_counts_interior_cells() {
        let vs = vec![
            Vec2::new(20.0, 20.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 20.0),
        ];
        let poly = Polygon::new(Vec2::new(10.0, 10.0), &vs);
        // scan is [0, 20) on both axes, every sample is inside or on the border
        assert_eq!(estimate_inertia(&poly), 400);
    }

    #[test]
    fn area_does_not_depend_on_winding() {
        let vs = vec![
            Vec2::new(0.0, 20.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 20.0),
        ];
        let poly = Polygon::new(Vec2::new(10.0, 10.0), &vs);
        assert_eq!(estimate_inertia(&poly), 400);
    }

    #[test]
    fn huge_polygon_saturates() {
        let vs = vec![
            Vec2::new(400.0, 400.0),
            Vec2::new(400.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 400.0),
        ];
        let poly = Polygon::new(Vec2::new(200.0, 200.0), &vs);
        assert_eq!(estimate_inertia(&poly), u16::MAX);
    }

    #[test]
    fn open_ring_has_no_area() {
        let vs = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)];
        let poly = Polygon::new(Vec2::new(5.0, 5.0), &vs);
        assert_eq!(estimate_inertia(&poly), 0);
    }
}
