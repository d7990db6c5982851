//! Read-only view of a step's result for renderers
//!
//! Built after a step; owns its data so the renderer never touches the
//! simulation. Presentation settings are applied here (trail and shake
//! toggles), never inside the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effects::Palette;
use super::state::{GamePhase, GameState, ObstacleKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub run_frame: u8,
    pub grounded: bool,
    pub attacking: bool,
    /// Blade swing progress in [0, 1] while attacking
    pub attack_progress: f32,
    /// Afterimage centers, newest first
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub frame: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: Palette,
    pub size: f32,
    /// Remaining life ratio in [0, 1]
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcView {
    pub pos: Vec2,
    pub progress: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    pub speed: f32,
    /// (speed - base) / (max - base), for speed bars and tints
    pub speed_ratio: f32,
    pub distance: f32,
    pub elapsed: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<ParticleView>,
    pub arcs: Vec<ArcView>,
    pub shake_offset: Vec2,
}

impl GameState {
    /// Capture the renderable state after a step
    pub fn snapshot(&self) -> Snapshot {
        let tuning = &self.tuning;
        let player = &self.player;
        let speed = self.speed();

        Snapshot {
            phase: self.phase,
            score: self.score(),
            best_score: self.best_score.max(self.score()),
            speed,
            speed_ratio: crate::unit_ratio(speed, tuning.base_speed, tuning.max_speed),
            distance: self.distance,
            elapsed: self.elapsed,
            player: PlayerView {
                pos: player.pos,
                size: player.size,
                run_frame: player.run_frame,
                grounded: player.grounded,
                attacking: player.is_attacking(),
                attack_progress: if player.is_attacking() {
                    1.0 - crate::unit_ratio(player.attack_timer, 0.0, tuning.attack_active_time)
                } else {
                    0.0
                },
                trail: if self.settings.trails {
                    player.trail.clone()
                } else {
                    Vec::new()
                },
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    pos: o.rect.pos,
                    size: o.rect.size,
                    frame: o.frame,
                })
                .collect(),
            particles: self
                .effects
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    size: p.size,
                    alpha: p.life_ratio(),
                })
                .collect(),
            arcs: self
                .effects
                .arcs
                .iter()
                .map(|a| ArcView {
                    pos: a.pos,
                    progress: a.progress(),
                })
                .collect(),
            shake_offset: if self.settings.effective_screen_shake() {
                self.effects.shake.offset
            } else {
                Vec2::ZERO
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Intent;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_of_fresh_state() {
        let state = GameState::new(1);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.speed_ratio, 0.0);
        assert!(snap.obstacles.is_empty());
        assert!(snap.player.grounded);
        assert_eq!(snap.shake_offset, Vec2::ZERO);
    }

    #[test]
    fn test_score_from_distance() {
        let mut state = GameState::new(1);
        state.distance = 1_239.0;
        let snap = state.snapshot();
        assert_eq!(snap.score, 123);
        // 130 + 1239 * 0.03 = 167.17
        assert!((snap.speed - 167.17).abs() < 1e-3);
        assert!(snap.speed_ratio > 0.0 && snap.speed_ratio < 1.0);
    }

    #[test]
    fn test_attack_visuals_in_snapshot() {
        let mut state = GameState::new(2);
        state.submit_intent(Intent::Attack);
        tick(&mut state, 0.016);
        let snap = state.snapshot();
        assert!(snap.player.attacking);
        assert!(snap.player.attack_progress > 0.0 && snap.player.attack_progress < 1.0);
        assert_eq!(snap.arcs.len(), 1);
        assert!(snap.arcs[0].progress > 0.0);
        assert!(snap.particles.iter().all(|p| p.alpha > 0.0 && p.alpha <= 1.0));
        assert!(state.effects.shake.trauma > 0.0);
    }

    #[test]
    fn test_reduced_motion_and_trails() {
        let settings = Settings {
            reduced_motion: true,
            trails: false,
            ..Default::default()
        };
        let mut state = GameState::with_config(2, Tuning::default(), settings);
        state.submit_intent(Intent::Attack);
        for _ in 0..2 {
            tick(&mut state, 0.016);
        }
        let snap = state.snapshot();
        assert!(state.effects.shake.trauma > 0.0);
        assert_eq!(snap.shake_offset, Vec2::ZERO);
        assert!(snap.player.trail.is_empty());
        assert!(!state.player.trail.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(3);
        state.submit_intent(Intent::Jump);
        tick(&mut state, 0.016);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.particles.len(), state.effects.particles.len());
    }
}
