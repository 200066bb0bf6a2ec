//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::obstacles::ObstacleCourse;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start; nothing simulates
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Crashed; waiting for restart
    Ended,
}

/// Things that happened during a tick or input, for host feedback (sound, haptics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    ObstacleSpawned { id: u32 },
    Scored { score: u32 },
    Crashed { score: u32 },
    NewBest { best: u32 },
}

/// The player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge, playfield space (down is positive)
    pub y: f32,
    /// Vertical velocity in px/tick
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self {
            y,
            vel: 0.0,
            rotation: 0.0,
        }
    }

    /// Bounding box at the bird's fixed column
    pub fn bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(tuning.bird_x, self.y),
            Vec2::new(tuning.bird_width, tuning.bird_height),
        )
    }

    /// Refresh rotation from the current velocity
    pub fn update_rotation(&mut self, tuning: &Tuning) {
        self.rotation = (self.vel * tuning.rotation_per_velocity)
            .clamp(tuning.rotation_min_deg, tuning.rotation_max_deg);
    }
}

/// An obstacle pair: a top span and a bottom span around a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Distance of the right edge from the playfield's right edge (grows as it scrolls left)
    pub offset: f32,
    /// Top of the gap, equal to the top span height
    pub gap_position: f32,
    pub gap_size: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    /// Left edge `x` in playfield space
    #[inline]
    pub fn left(&self, tuning: &Tuning) -> f32 {
        tuning.playfield_width - self.offset - tuning.obstacle_width
    }

    #[inline]
    pub fn top_height(&self) -> f32 {
        self.gap_position
    }

    #[inline]
    pub fn bottom_height(&self, tuning: &Tuning) -> f32 {
        tuning.playable_height() - self.gap_position - self.gap_size
    }

    pub fn top_span(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.left(tuning), 0.0),
            Vec2::new(tuning.obstacle_width, self.top_height()),
        )
    }

    pub fn bottom_span(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.left(tuning), self.gap_position + self.gap_size),
            Vec2::new(tuning.obstacle_width, self.bottom_height(tuning)),
        )
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub bird: Bird,
    pub course: ObstacleCourse,
    pub score: u32,
    /// Ticks simulated since the last start
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            bird: Bird::new(tuning.bird_start_y),
            course: ObstacleCourse::new(tuning.seed),
            score: 0,
            time_ticks: 0,
        }
    }

    /// Fresh bird, empty course, zero score. The RNG keeps its stream so
    /// consecutive runs see different gaps.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.bird = Bird::new(tuning.bird_start_y);
        self.course.clear();
        self.score = 0;
        self.time_ticks = 0;
    }
}
