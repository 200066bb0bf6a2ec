//! Render snapshot
//!
//! Everything a renderer needs for one frame, with no game logic attached.
//! Serializes to JSON for hosts that draw outside Rust.

use serde::{Deserialize, Serialize};

use crate::sim::session::Status;
use crate::sim::state::{GamePhase, GameState};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, positive tilts nose down
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    /// Left edge in playfield space
    pub x: f32,
    pub width: f32,
    pub gap_position: f32,
    pub gap_size: f32,
    pub top_height: f32,
    pub bottom_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    pub status: String,
    pub bird: BirdView,
    /// Oldest first
    pub obstacles: Vec<ObstacleView>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, tuning: &Tuning, best_score: u32, status: Status) -> Self {
        let obstacles = state
            .course
            .obstacles()
            .iter()
            .map(|o| ObstacleView {
                id: o.id,
                x: o.left(tuning),
                width: tuning.obstacle_width,
                gap_position: o.gap_position,
                gap_size: o.gap_size,
                top_height: o.top_height(),
                bottom_height: o.bottom_height(tuning),
            })
            .collect();

        Self {
            phase: state.phase,
            score: state.score,
            best_score,
            status: status.as_str().to_string(),
            bird: BirdView {
                x: tuning.bird_x,
                y: state.bird.y,
                width: tuning.bird_width,
                height: tuning.bird_height,
                rotation: state.bird.rotation,
            },
            obstacles,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    #[test]
    fn test_capture_spans() {
        let tuning = Tuning {
            playfield_height: 340.0,
            ground_height: 40.0,
            ..Default::default()
        };
        let mut state = GameState::new(&tuning);
        state.course.push(Obstacle {
            id: 3,
            offset: 10.0,
            gap_position: 100.0,
            gap_size: 80.0,
            passed: false,
        });

        let snap = RenderSnapshot::capture(&state, &tuning, 4, Status::Ready);
        assert_eq!(snap.phase, GamePhase::Idle);
        assert_eq!(snap.best_score, 4);
        assert_eq!(snap.status, "Ready to play");
        assert_eq!(snap.obstacles.len(), 1);
        let o = &snap.obstacles[0];
        assert_eq!(o.top_height, 100.0);
        assert_eq!(o.bottom_height, 120.0);
        assert_eq!(o.x, tuning.playfield_width - 10.0 - tuning.obstacle_width);
        assert_eq!(snap.bird.y, tuning.bird_start_y);
    }

    #[test]
    fn test_json_shape() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        let json = RenderSnapshot::capture(&state, &tuning, 0, Status::Ready)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Idle");
        assert_eq!(value["bird"]["x"], 50.0);
        assert!(value["obstacles"].as_array().unwrap().is_empty());
    }
}
