//! Procedural obstacle spawning with speed-scaled difficulty

use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Seconds between spawns at `speed`: shrinks as speed grows, floored
#[inline]
pub fn spawn_interval(tuning: &Tuning, speed: f32) -> f32 {
    (tuning.spawn_base_interval - tuning.spawn_interval_slope * (speed - tuning.base_speed))
        .max(tuning.spawn_min_interval)
}

/// Weighted kind draw: enemy with probability `enemy_chance`, else hazard
pub fn draw_kind(rng: &mut impl Rng, enemy_chance: f64) -> ObstacleKind {
    if rng.random_bool(enemy_chance) {
        ObstacleKind::Enemy
    } else {
        ObstacleKind::Hazard
    }
}

/// Count the spawn timer down; on expiry spawn one obstacle at the right
/// edge and re-arm for the current speed
pub fn tick_spawner(state: &mut GameState, speed: f32, dt: f32) {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return;
    }

    let kind = draw_kind(&mut state.rng, state.tuning.enemy_spawn_chance);
    let id = state.next_entity_id();
    let obstacle = Obstacle::new(id, kind, state.tuning.spawn_x(), state.tuning.ground_y);
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned { id, kind });

    state.spawn_timer = spawn_interval(&state.tuning, speed);
    log::debug!(
        "Spawned {:?} #{} (speed {:.0}, next in {:.2}s)",
        kind,
        id,
        speed,
        state.spawn_timer
    );
}
