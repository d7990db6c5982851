//! Collision detection and response between the player and obstacles
//!
//! Two hitboxes are tested per obstacle: the active attack box (enemies only)
//! and the player's body box (everything). Attack kills are resolved first so
//! an enemy cut down this step can never also kill the player.

use super::effects::Recipe;
use super::state::{GameEvent, GameState, Obstacle, Player};

/// What a single obstacle does to the player this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    /// Destroyed by the attack box
    Kill,
    /// Touched the body box
    Lethal,
}

/// Classify one obstacle against the player's hitboxes
pub fn check_contact(player: &Player, obstacle: &Obstacle) -> Contact {
    if player.is_attacking()
        && obstacle.kind.destructible()
        && player.attack_hitbox().overlaps(&obstacle.rect)
    {
        return Contact::Kill;
    }
    if player.body_hitbox().overlaps(&obstacle.rect) {
        return Contact::Lethal;
    }
    Contact::None
}

/// Result of a collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// IDs of enemies destroyed this step
    pub kills: Vec<u32>,
    /// Obstacle that ended the run, if any
    pub lethal: Option<u32>,
}

/// Resolve every live obstacle against the player.
///
/// Walks the list from the back so removals never skip or revisit an entry,
/// and stops at the first lethal contact.
pub fn resolve_collisions(state: &mut GameState) -> CollisionResult {
    let mut result = CollisionResult::default();

    let mut i = state.obstacles.len();
    while i > 0 {
        i -= 1;
        match check_contact(&state.player, &state.obstacles[i]) {
            Contact::Kill => {
                let obstacle = state.obstacles.remove(i);
                state
                    .effects
                    .emit(Recipe::KillBurst, obstacle.rect.center(), &mut state.fx_rng);
                state.events.push(GameEvent::EnemyDestroyed { id: obstacle.id });
                result.kills.push(obstacle.id);
                log::debug!("Enemy #{} destroyed", obstacle.id);
            }
            Contact::Lethal => {
                result.lethal = Some(state.obstacles[i].id);
                state.game_over();
                break;
            }
            Contact::None => {}
        }
    }

    result
}
