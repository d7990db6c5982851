//! Idle/demo mode - AI plays the game
//!
//! Looks at the nearest obstacle ahead and answers with the intent a player
//! would press this frame: cut enemies that enter blade reach, hop hazards
//! so the airtime straddles them.

use super::state::{GamePhase, GameState, Intent, ObstacleKind};

/// Airtime (seconds after take-off) the hazard crossing should be centered on
const JUMP_CENTER_TIME: f32 = 0.35;
/// Extra reach so the blade connects on the step after the press
const ATTACK_LEAD_TIME: f32 = 0.02;

/// Decide this frame's intent, if any
pub fn decide(state: &GameState) -> Option<Intent> {
    match state.phase {
        GamePhase::Ready => return Some(Intent::Attack),
        GamePhase::GameOver => return None,
        GamePhase::Playing => {}
    }

    let player = &state.player;
    let body = player.body_hitbox();
    let speed = state.speed();

    let next = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > body.left())
        .min_by(|a, b| a.rect.left().total_cmp(&b.rect.left()))?;

    match next.kind {
        ObstacleKind::Enemy => {
            let reach = player.attack_hitbox().right() + speed * ATTACK_LEAD_TIME;
            if next.rect.left() > reach || player.is_attacking() {
                return None;
            }
            if player.can_attack() {
                Some(Intent::Attack)
            } else if player.grounded {
                Some(Intent::Jump)
            } else {
                None
            }
        }
        ObstacleKind::Hazard => {
            // Gap at which the body/hazard overlap is centered on the jump apex
            let half_crossing = (body.size.x + next.rect.size.x) * 0.5;
            let trigger_gap = speed * JUMP_CENTER_TIME - half_crossing;
            let gap = next.rect.left() - body.right();
            (player.grounded && gap <= trigger_gap).then_some(Intent::Jump)
        }
    }
}
