//! Neon Runner - A side-scrolling slash runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, effects, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (particle caps, shake, trails)

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Largest step the simulation will integrate (seconds)
    pub const MAX_DT: f32 = 0.033;
    /// Nominal display refresh step used by the native driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 270.0;
    /// Y of the ground line (screen coordinates, +y down)
    pub const GROUND_Y: f32 = 230.0;

    /// Player defaults - fixed horizontal offset, feet on the ground
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 18.0;
    pub const PLAYER_HEIGHT: f32 = 28.0;

    /// Gravity on the player (pixels/s²)
    pub const GRAVITY: f32 = 1600.0;
    /// Jump impulse (negative = up)
    pub const JUMP_VELOCITY: f32 = -560.0;

    /// Run speed curve: min(max, base + distance * scale)
    pub const BASE_SPEED: f32 = 130.0;
    pub const SPEED_SCALE: f32 = 0.03;
    pub const MAX_SPEED: f32 = 400.0;

    /// Spawn interval: max(floor, base - slope * (speed - base_speed))
    pub const SPAWN_BASE_INTERVAL: f32 = 1.0;
    pub const SPAWN_INTERVAL_SLOPE: f32 = 0.003;
    pub const SPAWN_MIN_INTERVAL: f32 = 0.35;
    /// Grace period before the first obstacle after a reset
    pub const SPAWN_GRACE_INTERVAL: f32 = 0.8;
    /// Probability that a spawned obstacle is an enemy (else a hazard)
    pub const ENEMY_SPAWN_CHANCE: f64 = 0.6;

    /// Attack window and cooldown (seconds)
    pub const ATTACK_ACTIVE_TIME: f32 = 0.2;
    pub const ATTACK_COOLDOWN: f32 = 0.35;

    /// Distance units per score point
    pub const SCORE_DIVISOR: f32 = 10.0;
}

/// Position of `value` within `[lo, hi]`, clamped to [0, 1]
#[inline]
pub fn unit_ratio(value: f32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return 0.0;
    }
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}
