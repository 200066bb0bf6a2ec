//! Axis-aligned boxes in playfield space
//!
//! Playfield space has its origin at the top-left corner, `x` growing right and
//! `y` growing down (toward the ground).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Build from top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_touching() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Shared edge only
        let c = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Same rows, disjoint columns
        let b = Aabb::from_pos_size(Vec2::new(20.0, 0.0), Vec2::new(5.0, 10.0));
        assert!(!a.overlaps(&b));
        // Same columns, disjoint rows
        let c = Aabb::from_pos_size(Vec2::new(0.0, 11.0), Vec2::new(10.0, 5.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edges_and_size() {
        let a = Aabb::from_pos_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(a.left(), 1.0);
        assert_eq!(a.top(), 2.0);
        assert_eq!(a.right(), 4.0);
        assert_eq!(a.bottom(), 6.0);
        assert_eq!(a.size(), Vec2::new(3.0, 4.0));
    }
}
