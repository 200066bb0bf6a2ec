//! Obstacle generation and scrolling
//!
//! The course owns the live obstacle list in spawn order. Collision and scoring
//! only read it (scoring flips `passed`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Live obstacles plus the seeded RNG that places their gaps
#[derive(Debug, Clone)]
pub struct ObstacleCourse {
    obstacles: Vec<Obstacle>,
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleCourse {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub(crate) fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Whole-unit gap range `[min, max)` for the current playable height
    pub fn gap_range(tuning: &Tuning) -> (f32, f32) {
        let height = tuning.playable_height();
        (
            (height * tuning.gap_min_fraction).round(),
            (height * tuning.gap_max_fraction).round(),
        )
    }

    /// Create one obstacle just off the right edge with a random gap
    pub fn spawn(&mut self, tuning: &Tuning) -> &Obstacle {
        let (min_gap, max_gap) = Self::gap_range(tuning);
        let gap_position = if max_gap > min_gap {
            self.rng.random_range(min_gap..max_gap).floor()
        } else {
            min_gap
        };

        let id = self.next_id;
        self.next_id += 1;
        self.push(Obstacle {
            id,
            offset: -tuning.obstacle_width,
            gap_position,
            gap_size: tuning.gap_size,
            passed: false,
        })
    }

    /// Insert a prepared obstacle (tests and replays)
    pub fn push(&mut self, obstacle: Obstacle) -> &Obstacle {
        self.next_id = self.next_id.max(obstacle.id + 1);
        self.obstacles.push(obstacle);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every obstacle one tick and drop the ones past the left edge.
    /// Returns how many were removed.
    pub fn advance(&mut self, tuning: &Tuning) -> usize {
        let reap_offset = tuning.reap_offset();
        for obstacle in &mut self.obstacles {
            obstacle.offset += tuning.scroll_speed;
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.offset <= reap_offset);
        before - self.obstacles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_gap_within_bounds() {
        let tuning = Tuning::default();
        let (min_gap, max_gap) = ObstacleCourse::gap_range(&tuning);
        assert_eq!((min_gap, max_gap), (56.0, 168.0));

        let mut course = ObstacleCourse::new(42);
        for _ in 0..500 {
            let o = course.spawn(&tuning).clone();
            assert!(o.gap_position >= min_gap && o.gap_position < max_gap);
            assert_eq!(o.gap_position, o.gap_position.floor());
            assert_eq!(o.gap_size, tuning.gap_size);
            assert_eq!(o.offset, -tuning.obstacle_width);
            assert!(!o.passed);
        }
    }

    #[test]
    fn test_spawn_order_and_ids() {
        let tuning = Tuning::default();
        let mut course = ObstacleCourse::new(1);
        course.spawn(&tuning);
        course.spawn(&tuning);
        course.spawn(&tuning);
        let ids: Vec<u32> = course.obstacles().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let tuning = Tuning::default();
        let mut a = ObstacleCourse::new(99);
        let mut b = ObstacleCourse::new(99);
        for _ in 0..20 {
            assert_eq!(a.spawn(&tuning).gap_position, b.spawn(&tuning).gap_position);
        }
    }

    #[test]
    fn test_advance_empty_course() {
        let tuning = Tuning::default();
        let mut course = ObstacleCourse::new(1);
        assert_eq!(course.advance(&tuning), 0);
        assert!(course.is_empty());
    }

    #[test]
    fn test_advance_moves_and_reaps() {
        let tuning = Tuning::default();
        let mut course = ObstacleCourse::new(1);
        course.spawn(&tuning);
        course.advance(&tuning);
        assert_eq!(course.obstacles()[0].offset, -tuning.obstacle_width + tuning.scroll_speed);

        // Older obstacle right at the reap line, newer one far behind it
        course.clear();
        course.push(Obstacle {
            id: 10,
            offset: tuning.reap_offset() - 1.0,
            gap_position: 100.0,
            gap_size: 80.0,
            passed: true,
        });
        course.push(Obstacle {
            id: 11,
            offset: 0.0,
            gap_position: 100.0,
            gap_size: 80.0,
            passed: false,
        });
        assert_eq!(course.advance(&tuning), 1);
        assert_eq!(course.len(), 1);
        assert_eq!(course.obstacles()[0].id, 11);

        // Ids keep increasing past manually inserted ones
        assert_eq!(course.spawn(&tuning).id, 12);
    }
}
