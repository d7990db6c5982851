//! Player physics and the run-speed curve

use super::state::{Player, RUN_FRAME_TIME, RUN_FRAMES};
use crate::tuning::Tuning;

/// Run speed for a distance: linear from base, clamped at max
#[inline]
pub fn speed_for_distance(tuning: &Tuning, distance: f32) -> f32 {
    (tuning.base_speed + distance * tuning.speed_scale).min(tuning.max_speed)
}

/// Apply gravity, integrate, and clamp the player to the ground line.
///
/// Landing requires the feet at or below the ground while not rising, so a
/// jump started this step survives a zero-length step.
pub fn integrate_player(player: &mut Player, tuning: &Tuning, dt: f32) {
    player.vy += tuning.gravity * dt;
    player.pos.y += player.vy * dt;

    let ground = tuning.ground_y;
    let feet = player.pos.y + player.size.y;
    if feet > ground || (feet >= ground && player.vy >= 0.0) {
        player.pos.y = ground - player.size.y;
        player.vy = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

/// Advance the run cycle; faster running cycles frames faster.
/// Returns true when a new frame started (a footstep).
pub fn advance_run_animation(player: &mut Player, speed_ratio: f32, dt: f32) -> bool {
    player.run_accum += dt * speed_ratio;
    if player.run_accum > RUN_FRAME_TIME {
        player.run_accum = 0.0;
        player.run_frame = (player.run_frame + 1) % RUN_FRAMES;
        true
    } else {
        false
    }
}
