//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per host frame, no frame-time scaling
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod obstacles;
pub mod physics;
pub mod schedule;
pub mod scoring;
pub mod session;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionKind, check, find_collision};
pub use geometry::Aabb;
pub use obstacles::ObstacleCourse;
pub use schedule::{IntervalTimer, Schedule, TickDriver};
pub use session::{MAX_PENDING_EVENTS, Session, Status};
pub use state::{Bird, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{TickReport, tick};
