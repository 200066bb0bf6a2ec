//! Collision detection
//!
//! Pure checks over the current state. Ceiling and ground use the same
//! geometry the integrator clamps against, so a bird resting on either bound
//! counts as a hit.

use super::geometry::Aabb;
use super::state::{Bird, Obstacle};
use crate::tuning::Tuning;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Ground,
    Ceiling,
    TopSpan { obstacle_id: u32 },
    BottomSpan { obstacle_id: u32 },
}

/// Bird bottom reached the ground strip
#[inline]
pub fn hits_ground(bounds: &Aabb, tuning: &Tuning) -> bool {
    bounds.bottom() >= tuning.playfield_height - tuning.ground_height
}

/// Bird top reached the playfield top
#[inline]
pub fn hits_ceiling(bounds: &Aabb) -> bool {
    bounds.top() <= 0.0
}

/// First collision found, checking bounds before obstacles (in spawn order)
pub fn find_collision(bird: &Bird, obstacles: &[Obstacle], tuning: &Tuning) -> Option<CollisionKind> {
    let bounds = bird.bounds(tuning);

    if hits_ground(&bounds, tuning) {
        return Some(CollisionKind::Ground);
    }
    if hits_ceiling(&bounds) {
        return Some(CollisionKind::Ceiling);
    }

    for obstacle in obstacles {
        if bounds.overlaps(&obstacle.top_span(tuning)) {
            return Some(CollisionKind::TopSpan {
                obstacle_id: obstacle.id,
            });
        }
        if bounds.overlaps(&obstacle.bottom_span(tuning)) {
            return Some(CollisionKind::BottomSpan {
                obstacle_id: obstacle.id,
            });
        }
    }

    None
}

/// True if the bird touches the ground, the ceiling, or any obstacle span
#[inline]
pub fn check(bird: &Bird, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    find_collision(bird, obstacles, tuning).is_some()
}
