//! Data-driven game balance
//!
//! Every constant the simulation reads comes through [`Tuning`], so a host can
//! swap in a JSON file without recompiling. Geometry is assumed sane (the gap
//! must fit inside the playable height); nothing here guards against that.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    /// Total height, ground strip included
    pub playfield_height: f32,
    pub ground_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    /// Degrees of tilt per px/tick of velocity
    pub rotation_per_velocity: f32,
    pub rotation_min_deg: f32,
    pub rotation_max_deg: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_size: f32,
    pub gap_min_fraction: f32,
    pub gap_max_fraction: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ms: f64,

    /// RNG seed for gap placement
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_start_y: BIRD_START_Y,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            rotation_per_velocity: ROTATION_PER_VELOCITY,
            rotation_min_deg: ROTATION_MIN_DEG,
            rotation_max_deg: ROTATION_MAX_DEG,

            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            gap_min_fraction: GAP_MIN_FRACTION,
            gap_max_fraction: GAP_MAX_FRACTION,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            seed: 0x5eed_f1a9,
        }
    }
}

impl Tuning {
    /// Height the bird and obstacles can occupy (ground excluded)
    #[inline]
    pub fn playable_height(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Lowest allowed bird `y` (top edge)
    #[inline]
    pub fn max_bird_y(&self) -> f32 {
        self.playfield_height - self.bird_height - self.ground_height
    }

    /// Obstacle offset at which its right edge has moved left of the bird.
    /// The whole obstacle must clear the bird's column before it scores, so
    /// a pass counts a few ticks after the bird leaves the gap.
    #[inline]
    pub fn pass_offset(&self) -> f32 {
        self.playfield_width - self.bird_x
    }

    /// Obstacle offset past which it is off-screen and reaped
    #[inline]
    pub fn reap_offset(&self) -> f32 {
        self.playfield_width + self.obstacle_width
    }

    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        let t = Tuning::default();
        assert_eq!(t.playable_height(), 280.0);
        assert_eq!(t.max_bird_y(), 266.0);
        assert_eq!(t.pass_offset(), 190.0);
        assert_eq!(t.reap_offset(), 292.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.25, "seed": 7 }"#).unwrap();
        assert_eq!(t.gravity, 0.25);
        assert_eq!(t.seed, 7);
        assert_eq!(t.jump_strength, JUMP_STRENGTH);
        assert_eq!(t.gap_size, GAP_SIZE);
        assert_eq!(t.rotation_max_deg, ROTATION_MAX_DEG);
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut t = Tuning::default();
        t.scroll_speed = 3.5;
        let back = Tuning::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
    }
}
