//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, clamped per step
//! - Seeded RNG only (separate gameplay and effect streams)
//! - Input buffered and applied at step boundaries
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod effects;
pub mod physics;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, clamp_dt};
pub use collision::{CollisionResult, Contact, check_contact, resolve_collisions};
pub use effects::{AttackArc, Effects, Palette, Particle, Recipe, Shake};
pub use physics::{integrate_player, speed_for_distance};
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use spawner::spawn_interval;
pub use state::{
    GameEvent, GamePhase, GameState, Intent, Obstacle, ObstacleKind, Player, TRAIL_LENGTH,
};
pub use tick::tick;
