//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults mirror [`crate::consts`]; a JSON document may override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Gameplay constants (field geometry, physics, difficulty curve, scoring)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub ground_y: f32,

    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    pub gravity: f32,
    pub jump_velocity: f32,

    pub base_speed: f32,
    pub speed_scale: f32,
    pub max_speed: f32,

    pub spawn_base_interval: f32,
    pub spawn_interval_slope: f32,
    pub spawn_min_interval: f32,
    pub spawn_grace_interval: f32,
    pub enemy_spawn_chance: f64,

    pub attack_active_time: f32,
    pub attack_cooldown: f32,

    pub score_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            base_speed: BASE_SPEED,
            speed_scale: SPEED_SCALE,
            max_speed: MAX_SPEED,

            spawn_base_interval: SPAWN_BASE_INTERVAL,
            spawn_interval_slope: SPAWN_INTERVAL_SLOPE,
            spawn_min_interval: SPAWN_MIN_INTERVAL,
            spawn_grace_interval: SPAWN_GRACE_INTERVAL,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,

            attack_active_time: ATTACK_ACTIVE_TIME,
            attack_cooldown: ATTACK_COOLDOWN,

            score_divisor: SCORE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every constant keeps the simulation well-formed
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::OutOfRange { field, value: value as f64 })
            }
        }

        positive("field_width", self.field_width)?;
        positive("ground_y", self.ground_y)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("gravity", self.gravity)?;
        positive("base_speed", self.base_speed)?;
        positive("spawn_base_interval", self.spawn_base_interval)?;
        positive("spawn_min_interval", self.spawn_min_interval)?;
        positive("spawn_grace_interval", self.spawn_grace_interval)?;
        positive("attack_active_time", self.attack_active_time)?;
        positive("attack_cooldown", self.attack_cooldown)?;
        positive("score_divisor", self.score_divisor)?;

        if !(self.jump_velocity < 0.0) {
            return Err(TuningError::OutOfRange {
                field: "jump_velocity",
                value: self.jump_velocity as f64,
            });
        }
        if !(self.speed_scale >= 0.0) {
            return Err(TuningError::OutOfRange {
                field: "speed_scale",
                value: self.speed_scale as f64,
            });
        }
        if !(self.max_speed >= self.base_speed) {
            return Err(TuningError::OutOfRange {
                field: "max_speed",
                value: self.max_speed as f64,
            });
        }
        if !(self.spawn_interval_slope >= 0.0) {
            return Err(TuningError::OutOfRange {
                field: "spawn_interval_slope",
                value: self.spawn_interval_slope as f64,
            });
        }
        if !(0.0..=1.0).contains(&self.enemy_spawn_chance) {
            return Err(TuningError::OutOfRange {
                field: "enemy_spawn_chance",
                value: self.enemy_spawn_chance,
            });
        }
        // Re-triggering mid-window would let one attack overlap the next
        if self.attack_cooldown < self.attack_active_time {
            return Err(TuningError::OutOfRange {
                field: "attack_cooldown",
                value: self.attack_cooldown as f64,
            });
        }
        if self.player_height >= self.ground_y {
            return Err(TuningError::OutOfRange {
                field: "player_height",
                value: self.player_height as f64,
            });
        }

        Ok(())
    }

    /// Y of the player's top edge when standing on the ground
    #[inline]
    pub fn player_rest_y(&self) -> f32 {
        self.ground_y - self.player_height
    }

    /// X where new obstacles appear (just past the right edge)
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.field_width + 20.0
    }
}
