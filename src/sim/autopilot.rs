//! Demo autopilot
//!
//! Steers toward the next gap the bird has not cleared yet. It flaps as late
//! as possible: only when the coming tick would drop the bird's bottom edge
//! within `margin` of the gap floor.

use super::state::GameState;
use crate::tuning::Tuning;

/// Default clearance kept above the gap floor
pub const DEFAULT_MARGIN: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Autopilot {
    /// Top and bottom of the gap currently being aimed at. With no obstacle
    /// ahead, aim at a gap-sized band centered in the playable area.
    pub fn target_gap(&self, state: &GameState, tuning: &Tuning) -> (f32, f32) {
        state
            .course
            .obstacles()
            .iter()
            .find(|o| o.left(tuning) + tuning.obstacle_width > tuning.bird_x)
            .map(|o| (o.gap_position, o.gap_position + o.gap_size))
            .unwrap_or_else(|| {
                let top = (tuning.playable_height() - tuning.gap_size) / 2.0;
                (top, top + tuning.gap_size)
            })
    }

    /// Whether to flap before the next tick
    pub fn should_flap(&self, state: &GameState, tuning: &Tuning) -> bool {
        let bird = &state.bird;
        if bird.vel < 0.0 {
            return false;
        }
        let (_, gap_bottom) = self.target_gap(state, tuning);
        let next_bottom = bird.y + bird.vel + tuning.gravity + tuning.bird_height;
        next_bottom > gap_bottom - self.margin
    }
}
