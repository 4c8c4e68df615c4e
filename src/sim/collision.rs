//! Axis-aligned bounding box collision between boat and iceberg
//!
//! Both shapes are approximated by a rectangle in the x/y plane; depth is
//! ignored.

use glam::Vec2;

use super::state::{Boat, Iceberg};
use crate::consts::{BOAT_BOX_HEIGHT, BOAT_BOX_LEFT, BOAT_BOX_RIGHT};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive overlap test: boxes sharing an edge count as touching.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x_overlap = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y_overlap = self.max.y >= other.min.y && self.min.y <= other.max.y;
        x_overlap && y_overlap
    }
}

/// Rudder tip to bow, keel to sail top
pub fn boat_aabb(boat: &Boat) -> Aabb {
    Aabb::new(
        Vec2::new(boat.x - BOAT_BOX_LEFT, boat.y),
        Vec2::new(boat.x + BOAT_BOX_RIGHT, boat.y + BOAT_BOX_HEIGHT),
    )
}

/// Base to peak, scaled by the zoom factor
pub fn iceberg_aabb(iceberg: &Iceberg) -> Aabb {
    let half_width = iceberg.half_width();
    Aabb::new(
        Vec2::new(iceberg.x - half_width, iceberg.y),
        Vec2::new(iceberg.x + half_width, iceberg.y + iceberg.height()),
    )
}

/// Check whether the boat has struck the iceberg
pub fn boat_hits_iceberg(boat: &Boat, iceberg: &Iceberg) -> bool {
    boat_aabb(boat).overlaps(&iceberg_aabb(iceberg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_touching_edges() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5));
        let b = Aabb::new(Vec2::new(0.5, 0.25), Vec2::new(1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_separated_on_one_axis() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5));
        // Overlaps in y only
        let b = Aabb::new(Vec2::new(0.75, 0.0), Vec2::new(1.0, 0.5));
        assert!(!a.overlaps(&b));
        // Overlaps in x only
        let c = Aabb::new(Vec2::new(0.0, 0.75), Vec2::new(0.5, 1.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_boat_box_extents() {
        let boat = Boat {
            x: 0.5,
            y: 0.25,
            ..Default::default()
        };
        let aabb = boat_aabb(&boat);
        assert!((aabb.min.x - 0.25).abs() < 1e-6);
        assert!((aabb.max.x - 0.7).abs() < 1e-6);
        assert!((aabb.min.y - 0.25).abs() < 1e-6);
        assert!((aabb.max.y - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_iceberg_box_scales_with_zoom() {
        let iceberg = Iceberg {
            zoom: 2.0,
            ..Default::default()
        };
        let aabb = iceberg_aabb(&iceberg);
        assert!((aabb.min.x - 1.0).abs() < 1e-6);
        assert!((aabb.max.x - 1.4).abs() < 1e-6);
        assert!((aabb.min.y - 0.1).abs() < 1e-6);
        assert!((aabb.max.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_start_position_is_clear() {
        assert!(!boat_hits_iceberg(&Boat::default(), &Iceberg::default()));
    }

    #[test]
    fn test_zoom_two_boundary() {
        let iceberg = Iceberg {
            zoom: 2.0,
            ..Default::default()
        };
        let left_edge = iceberg_aabb(&iceberg).min.x;

        let just_short = Boat {
            x: left_edge - BOAT_BOX_RIGHT - 0.001,
            ..Default::default()
        };
        assert!(!boat_hits_iceberg(&just_short, &iceberg));

        let just_touching = Boat {
            x: left_edge - BOAT_BOX_RIGHT + 0.001,
            ..Default::default()
        };
        assert!(boat_hits_iceberg(&just_touching, &iceberg));
    }

    #[test]
    fn test_sunk_boat_below_iceberg_misses() {
        let boat = Boat {
            x: 1.2,
            y: -0.5,
            ..Default::default()
        };
        assert!(!boat_hits_iceberg(&boat, &Iceberg::default()));
    }
}
