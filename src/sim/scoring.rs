//! Score keeping

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Flag obstacles whose right edge has moved left of the bird and return the
/// ids newly passed. Each obstacle counts at most once.
pub fn award_passes(obstacles: &mut [Obstacle], score: &mut u32, tuning: &Tuning) -> Vec<u32> {
    let pass_offset = tuning.pass_offset();
    let mut passed = Vec::new();
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.offset > pass_offset {
            obstacle.passed = true;
            *score += 1;
            passed.push(obstacle.id);
        }
    }
    passed
}

/// Raise `best` to `score` if it was beaten. Returns the new best when raised,
/// which is the value that should be persisted.
pub fn finalize(score: u32, best: &mut u32) -> Option<u32> {
    if score > *best {
        *best = score;
        Some(score)
    } else {
        None
    }
}
