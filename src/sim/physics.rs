//! Bird integration
//!
//! Gravity and the flap impulse are applied once per tick, in px/tick units.
//! Nothing is scaled by frame time, so game speed follows the host's tick rate.

use super::state::Bird;
use crate::tuning::Tuning;

/// Advance the bird one tick: `v += g`, then `y += v` clamped to the playfield.
///
/// The clamp never reports a hit; ceiling and ground contact are re-derived by
/// the collision pass from the same geometry.
pub fn integrate(bird: &mut Bird, tuning: &Tuning) {
    bird.vel += tuning.gravity;
    bird.y = (bird.y + bird.vel).clamp(0.0, tuning.max_bird_y());
    bird.update_rotation(tuning);
}

/// Flap: velocity is overwritten, not accumulated
#[inline]
pub fn jump(bird: &mut Bird, tuning: &Tuning) {
    bird.vel = tuning.jump_strength;
}
