//! Per-tick simulation pipeline
//!
//! One call advances a running game by exactly one tick in a fixed order:
//! physics, obstacle scroll/reap, scoring, collision.

use super::collision::{CollisionKind, find_collision};
use super::physics;
use super::scoring::award_passes;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Ids of obstacles that scored this tick
    pub scored: Vec<u32>,
    /// Obstacles dropped off the left edge
    pub reaped: usize,
    /// Set when the tick ended the run
    pub collision: Option<CollisionKind>,
}

/// Advance the game by one tick.
///
/// Returns `None` without touching anything if the game is not running, so a
/// stale tick after a crash does nothing. A collision moves the phase to
/// `Ended`; cancelling timers and finalizing the score is the session's job.
pub fn tick(state: &mut GameState, tuning: &Tuning) -> Option<TickReport> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.time_ticks += 1;

    physics::integrate(&mut state.bird, tuning);

    let reaped = state.course.advance(tuning);

    let scored = award_passes(state.course.obstacles_mut(), &mut state.score, tuning);

    let collision = find_collision(&state.bird, state.course.obstacles(), tuning);
    if collision.is_some() {
        state.phase = GamePhase::Ended;
    }

    Some(TickReport {
        scored,
        reaped,
        collision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn running(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_noop_when_not_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let before = state.bird;
        assert_eq!(tick(&mut state, &tuning), None);
        assert_eq!(state.bird, before);
        assert_eq!(state.time_ticks, 0);

        state.phase = GamePhase::Ended;
        assert_eq!(tick(&mut state, &tuning), None);
    }

    #[test]
    fn test_tick_applies_gravity() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        let report = tick(&mut state, &tuning).unwrap();
        assert_eq!(report, TickReport::default());
        assert_eq!(state.bird.vel, tuning.gravity);
        assert_eq!(state.bird.y, tuning.bird_start_y + tuning.gravity);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_free_fall_ends_on_ground() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        let mut last = None;
        for _ in 0..200 {
            match tick(&mut state, &tuning) {
                Some(report) => last = Some(report),
                None => break,
            }
        }
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(last.unwrap().collision, Some(CollisionKind::Ground));
        assert_eq!(state.bird.y, tuning.max_bird_y());
    }

    #[test]
    fn test_score_counted_before_collision() {
        // Obstacle crosses the pass line on the same tick the bird hits the ground
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.bird.y = tuning.max_bird_y();
        state.course.push(Obstacle {
            id: 1,
            offset: tuning.pass_offset() - tuning.scroll_speed + 0.5,
            gap_position: 100.0,
            gap_size: 80.0,
            passed: false,
        });

        let report = tick(&mut state, &tuning).unwrap();
        assert_eq!(report.scored, vec![1]);
        assert_eq!(report.collision, Some(CollisionKind::Ground));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_reaped_obstacles_reported() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.bird.vel = -3.0;
        state.course.push(Obstacle {
            id: 1,
            offset: tuning.reap_offset(),
            gap_position: 100.0,
            gap_size: 80.0,
            passed: true,
        });
        let report = tick(&mut state, &tuning).unwrap();
        assert_eq!(report.reaped, 1);
        assert!(state.course.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }
}
