//! Simulation step
//!
//! One call per display refresh. Buffered input is applied at the step
//! boundary, gameplay runs only while playing, effects always run.

use glam::Vec2;

use super::clock::clamp_dt;
use super::collision::resolve_collisions;
use super::effects::Recipe;
use super::physics::{advance_run_animation, integrate_player};
use super::spawner::tick_spawner;
use super::state::{GameEvent, GamePhase, GameState, Intent};

/// Advance the game state by `dt` seconds (clamped to `[0, MAX_DT]`)
pub fn tick(state: &mut GameState, dt: f32) {
    let dt = clamp_dt(dt);
    state.events.clear();

    if std::mem::take(&mut state.start_requested) {
        state.begin_playing();
    }
    let pending = std::mem::take(&mut state.pending);
    for intent in pending {
        apply_intent(state, intent);
    }

    state.elapsed += dt;

    if state.phase == GamePhase::Playing {
        step_gameplay(state, dt);
    }

    state.effects.tick(dt, &mut state.fx_rng);
}

/// Interpret one intent. Jump/attack both start a run from `Ready`.
fn apply_intent(state: &mut GameState, intent: Intent) {
    state.begin_playing();
    if state.phase != GamePhase::Playing {
        return;
    }

    match intent {
        Intent::Jump => {
            if state.player.jump(state.tuning.jump_velocity) {
                let feet = state.player.feet();
                state
                    .effects
                    .emit(Recipe::JumpBurst, feet, &mut state.fx_rng);
                state.events.push(GameEvent::Jumped);
            }
        }
        Intent::Attack => {
            let tuning = &state.tuning;
            if state
                .player
                .attack(tuning.attack_active_time, tuning.attack_cooldown)
            {
                let blade = state.player.blade_point();
                state.effects.spawn_attack_arc(blade + Vec2::new(2.0, 0.0));
                state
                    .effects
                    .emit(Recipe::AttackSparks, blade + Vec2::new(10.0, 0.0), &mut state.fx_rng);
                state.events.push(GameEvent::Attacked);
            }
        }
    }
}

/// Physics, spawning, scrolling and collisions for one playing step
fn step_gameplay(state: &mut GameState, dt: f32) {
    let speed = state.speed();
    state.distance += speed * dt;

    // Player
    integrate_player(&mut state.player, &state.tuning, dt);
    let speed_ratio = speed / state.tuning.base_speed;
    if advance_run_animation(&mut state.player, speed_ratio, dt) && state.player.grounded {
        let foot = Vec2::new(state.player.pos.x, state.player.pos.y + state.player.size.y);
        state.effects.emit(Recipe::Dust, foot, &mut state.fx_rng);
    }
    state.player.record_trail();
    state.player.tick_attack(dt);

    tick_spawner(state, speed, dt);

    for obstacle in state.obstacles.iter_mut() {
        obstacle.advance(speed, dt);
    }
    state.obstacles.retain(|o| !o.is_offscreen());

    resolve_collisions(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_WIDTH;
    use crate::sim::state::{Obstacle, ObstacleKind};

    const DT: f32 = 0.016;

    #[test]
    fn test_ready_is_frozen() {
        let mut state = GameState::new(1);
        for _ in 0..200 {
            tick(&mut state, DT);
        }
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.distance, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.elapsed > 3.0);
    }

    #[test]
    fn test_jump_from_ready_starts_and_lands() {
        let mut state = GameState::new(2);
        state.submit_intent(Intent::Jump);
        tick(&mut state, 0.0);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events, vec![GameEvent::Started, GameEvent::Jumped]);
        assert_eq!(state.effects.particles.len(), Recipe::JumpBurst.params().count);
        assert_eq!(state.player.vy, state.tuning.jump_velocity);
        assert!(!state.player.grounded);

        let mut steps = 0;
        while !state.player.grounded {
            tick(&mut state, DT);
            steps += 1;
            assert!(steps < 200, "never landed");
        }
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(
            state.player.pos.y + state.player.size.y,
            state.tuning.ground_y
        );
    }

    #[test]
    fn test_no_double_jump() {
        let mut state = GameState::new(3);
        state.submit_intent(Intent::Jump);
        state.submit_intent(Intent::Jump);
        tick(&mut state, 0.0);
        let jumps = state.events.iter().filter(|e| **e == GameEvent::Jumped).count();
        assert_eq!(jumps, 1);

        tick(&mut state, DT);
        let vy = state.player.vy;
        state.submit_intent(Intent::Jump);
        tick(&mut state, 0.0);
        assert_eq!(state.player.vy, vy);
        assert!(!state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_first_spawn_after_grace() {
        let mut state = GameState::new(4);
        state.start();

        let mut elapsed = 0.0;
        while state.obstacles.is_empty() {
            tick(&mut state, DT);
            elapsed += DT;
            assert!(elapsed < 1.0, "no spawn");
        }
        assert!(elapsed >= state.tuning.spawn_grace_interval - 1e-4);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].rect.left() > FIELD_WIDTH);
        assert_eq!(state.obstacles[0].rect.bottom(), state.tuning.ground_y);
    }

    #[test]
    fn test_attack_cooldown_gates_intent() {
        let mut state = GameState::new(5);
        state.start();
        tick(&mut state, DT);

        state.submit_intent(Intent::Attack);
        state.submit_intent(Intent::Attack);
        tick(&mut state, DT);
        let attacks = state.events.iter().filter(|e| **e == GameEvent::Attacked).count();
        assert_eq!(attacks, 1);
        assert_eq!(state.effects.arcs.len(), 1);
        assert!(state.player.is_attacking());

        // Still cooling down 0.2s later
        for _ in 0..12 {
            tick(&mut state, DT);
        }
        state.submit_intent(Intent::Attack);
        tick(&mut state, DT);
        assert!(!state.events.contains(&GameEvent::Attacked));

        for _ in 0..10 {
            tick(&mut state, DT);
        }
        state.submit_intent(Intent::Attack);
        tick(&mut state, DT);
        assert!(state.events.contains(&GameEvent::Attacked));
    }

    #[test]
    fn test_attack_destroys_approaching_enemy() {
        let mut state = GameState::new(6);
        state.start();
        tick(&mut state, DT);

        let id = state.next_entity_id();
        let x = state.player.pos.x + state.player.size.x + 20.0;
        state
            .obstacles
            .push(Obstacle::new(id, ObstacleKind::Enemy, x, state.tuning.ground_y));
        state.submit_intent(Intent::Attack);
        tick(&mut state, DT);

        assert!(state.events.contains(&GameEvent::EnemyDestroyed { id }));
        assert!(state.obstacles.iter().all(|o| o.id != id));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_is_terminal_until_reset() {
        let mut state = GameState::new(7);
        state.start();
        tick(&mut state, DT);

        let id = state.next_entity_id();
        let x = state.player.pos.x + 4.0;
        state
            .obstacles
            .push(Obstacle::new(id, ObstacleKind::Hazard, x, state.tuning.ground_y));
        tick(&mut state, DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(matches!(state.events.last(), Some(GameEvent::GameOver { .. })));

        let distance = state.distance;
        for _ in 0..10 {
            state.submit_intent(Intent::Jump);
            state.submit_intent(Intent::Attack);
            tick(&mut state, DT);
            assert!(state.events.is_empty());
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.distance, distance);
        assert!(state.player.grounded);

        state.reset();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.distance, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.effects.particles.is_empty());
        assert!(state.effects.arcs.is_empty());

        state.submit_intent(Intent::Attack);
        tick(&mut state, DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_effects_decay_outside_playing() {
        let mut state = GameState::new(8);
        state.start();
        tick(&mut state, DT);
        let id = state.next_entity_id();
        let x = state.player.pos.x;
        state
            .obstacles
            .push(Obstacle::new(id, ObstacleKind::Enemy, x, state.tuning.ground_y));
        tick(&mut state, DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.effects.particles.is_empty());

        for _ in 0..60 {
            tick(&mut state, DT);
        }
        assert!(state.effects.particles.is_empty());
        assert_eq!(state.effects.shake.trauma, 0.0);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut state = GameState::new(9);
        state.start();
        tick(&mut state, 0.0);
        tick(&mut state, 5.0);
        assert!((state.distance - state.tuning.base_speed * crate::consts::MAX_DT).abs() < 1e-4);

        let before = state.distance;
        tick(&mut state, -1.0);
        tick(&mut state, f32::NAN);
        assert_eq!(state.distance, before);
    }

    #[test]
    fn test_footsteps_kick_dust() {
        let mut state = GameState::new(10);
        state.start();
        for _ in 0..10 {
            tick(&mut state, DT);
        }
        assert!(!state.effects.particles.is_empty());
        assert_eq!(state.player.trail.len(), crate::sim::state::TRAIL_LENGTH);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut state = GameState::new(seed);
            state.start();
            for i in 0..600 {
                if i % 45 == 0 {
                    state.submit_intent(Intent::Jump);
                }
                if i % 30 == 0 {
                    state.submit_intent(Intent::Attack);
                }
                tick(&mut state, DT);
            }
            (
                state.phase,
                state.distance,
                state
                    .obstacles
                    .iter()
                    .map(|o| (o.id, o.kind, o.rect.pos))
                    .collect::<Vec<_>>(),
                state
                    .effects
                    .particles
                    .iter()
                    .map(|p| p.pos)
                    .collect::<Vec<_>>(),
            )
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn test_effect_settings_do_not_change_gameplay() {
        let run = |particles: bool| {
            let settings = crate::Settings {
                particles,
                ..Default::default()
            };
            let mut state = GameState::with_config(99, crate::Tuning::default(), settings);
            state.start();
            for _ in 0..400 {
                tick(&mut state, DT);
            }
            state
                .obstacles
                .iter()
                .map(|o| (o.kind, o.rect.pos))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(true), run(false));
    }
}
