//! Flappy Course - A side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (physics, obstacles, collisions, scoring, session)
//! - `input`: Host gesture/key mapping into edge-triggered input events
//! - `persistence`: Key-value store contract and backends
//! - `best_score`: Persisted best score record
//! - `snapshot`: Per-tick render snapshot consumed by the host
//! - `platform`: Browser bindings (wasm32 only)
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use best_score::BestScore;
pub use input::{HostSignal, InputEvent, InputMapper};
pub use persistence::{MemoryStore, PersistRequest, PersistenceAdapter, PersistenceError};
pub use sim::{GameEvent, GamePhase, Session};
pub use snapshot::RenderSnapshot;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (ground strip included in the height)
    pub const PLAYFIELD_WIDTH: f32 = 240.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 20.0;
    pub const BIRD_HEIGHT: f32 = 14.0;
    pub const BIRD_START_Y: f32 = 100.0;

    /// Downward acceleration added to velocity every tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (px/tick, negative is up)
    pub const JUMP_STRENGTH: f32 = -8.0;
    /// Visual tilt per unit of velocity (degrees)
    pub const ROTATION_PER_VELOCITY: f32 = 3.0;
    pub const ROTATION_MIN_DEG: f32 = -30.0;
    pub const ROTATION_MAX_DEG: f32 = 90.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const GAP_SIZE: f32 = 80.0;
    /// Gap top is drawn from [MIN, MAX) fractions of the playable height
    pub const GAP_MIN_FRACTION: f32 = 0.2;
    pub const GAP_MAX_FRACTION: f32 = 0.6;
    /// Horizontal scroll per tick (px/tick, not scaled by frame time)
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Wall-clock spawn period
    pub const SPAWN_INTERVAL_MS: f64 = 3000.0;

    /// Storage key for the best score
    pub const BEST_SCORE_KEY: &str = "flappy_high_score";
}
