//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one [`GameState`] value, so
//! independent runs (tests, demo mode) never share state.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::Effects;
use super::rect::Rect;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// PCG stream for gameplay draws (spawn kinds)
pub const GAMEPLAY_STREAM: u64 = 0;
/// PCG stream for cosmetic draws (particles, shake jitter)
pub const EFFECT_STREAM: u64 = 1;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input; only effects run
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a reset; only effects run
    GameOver,
}

/// Decoded discrete input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Jump,
    Attack,
}

/// Something that happened during a step (for renderers and audio hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Attacked,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    EnemyDestroyed { id: u32 },
    GameOver { score: u64 },
    Reset,
}

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 8;

/// Number of frames in the run cycle
pub const RUN_FRAMES: u8 = 4;
/// Seconds per run frame at base speed
pub const RUN_FRAME_TIME: f32 = 0.1;

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x is a fixed screen offset)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub grounded: bool,
    /// Seconds of active attack hitbox remaining
    pub attack_timer: f32,
    /// Seconds until the next attack may trigger
    pub attack_cooldown: f32,
    pub run_frame: u8,
    pub run_accum: f32,
    /// Recent centers for the afterimage (newest first)
    pub trail: Vec<Vec2>,
}

impl Player {
    /// Player standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        debug_assert!(tuning.player_width > 0.0 && tuning.player_height > 0.0);
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_rest_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vy: 0.0,
            grounded: true,
            attack_timer: 0.0,
            attack_cooldown: 0.0,
            run_frame: 0,
            run_accum: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Drawn sprite box
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Feet position (bottom center)
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y + self.size.y)
    }

    /// Lethal hitbox, slightly inset from the sprite
    pub fn body_hitbox(&self) -> Rect {
        self.rect().inset(2.0, 2.0, 2.0, 0.0)
    }

    /// Blade reach in front of the player
    pub fn attack_hitbox(&self) -> Rect {
        Rect::new(self.pos.x + self.size.x, self.pos.y + 2.0, 26.0, 22.0)
    }

    /// Where the attack visuals originate
    pub fn blade_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x, self.pos.y + self.size.y * 0.4)
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_timer > 0.0
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }

    /// Start a jump if standing on the ground. Returns whether it fired.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = jump_velocity;
        self.grounded = false;
        true
    }

    /// Open the attack window if the cooldown has elapsed. Returns whether it fired.
    pub fn attack(&mut self, active_time: f32, cooldown: f32) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.attack_timer = active_time;
        self.attack_cooldown = cooldown;
        true
    }

    /// Count attack timers down, stopping at zero
    pub fn tick_attack(&mut self, dt: f32) {
        self.attack_timer = (self.attack_timer - dt).max(0.0);
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
    }

    /// Record current center to trail (call each playing step)
    pub fn record_trail(&mut self) {
        let center = self.center();
        self.trail.insert(0, center);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Spikes: lethal on touch, immune to attacks
    Hazard,
    /// Lethal on touch, destroyed by an active attack
    Enemy,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Hazard => Vec2::new(16.0, 18.0),
            ObstacleKind::Enemy => Vec2::new(18.0, 26.0),
        }
    }

    pub fn destructible(&self) -> bool {
        matches!(self, ObstacleKind::Enemy)
    }
}

/// Seconds per obstacle animation frame
pub const OBSTACLE_FRAME_TIME: f32 = 0.15;
/// Obstacles are culled once their right edge passes this x
pub const OBSTACLE_CULL_X: f32 = -10.0;

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Two-frame idle animation
    pub frame: u8,
    pub anim_timer: f32,
}

impl Obstacle {
    /// Obstacle resting on the ground with its left edge at `x`
    pub fn new(id: u32, kind: ObstacleKind, x: f32, ground_y: f32) -> Self {
        let size = kind.size();
        Self {
            id,
            kind,
            rect: Rect::new(x, ground_y - size.y, size.x, size.y),
            frame: 0,
            anim_timer: 0.0,
        }
    }

    /// Scroll left and advance the animation
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.rect.pos.x -= speed * dt;
        self.anim_timer += dt;
        if self.anim_timer > OBSTACLE_FRAME_TIME {
            self.anim_timer = 0.0;
            self.frame = (self.frame + 1) % 2;
        }
    }

    pub fn is_offscreen(&self) -> bool {
        self.rect.right() < OBSTACLE_CULL_X
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (spawn kinds)
    pub rng: Pcg32,
    /// Cosmetic RNG (particles, shake)
    pub fx_rng: Pcg32,
    pub tuning: Tuning,
    pub settings: Settings,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Distance run this attempt
    pub distance: f32,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    /// Visual particles (not gameplay-affecting)
    pub effects: Effects,
    /// Best score of this session
    pub best_score: u64,
    /// Seconds simulated across all phases
    pub elapsed: f32,
    /// Events produced by the last step
    pub events: Vec<GameEvent>,
    /// Intents waiting for the next step
    pub(crate) pending: Vec<Intent>,
    pub(crate) start_requested: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning and settings
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Tuning::default(), Settings::default())
    }

    pub fn with_config(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let max_particles = settings.max_particles();
        Self {
            seed,
            rng: Pcg32::new(seed, GAMEPLAY_STREAM),
            fx_rng: Pcg32::new(seed, EFFECT_STREAM),
            player: Player::new(&tuning),
            spawn_timer: tuning.spawn_grace_interval,
            tuning,
            settings,
            phase: GamePhase::Ready,
            obstacles: Vec::new(),
            distance: 0.0,
            effects: Effects::new(max_particles),
            best_score: 0,
            elapsed: 0.0,
            events: Vec::new(),
            pending: Vec::new(),
            start_requested: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an intent; it is applied at the start of the next step
    pub fn submit_intent(&mut self, intent: Intent) {
        self.pending.push(intent);
    }

    /// Request an explicit start; applied at the next step boundary
    pub fn start(&mut self) {
        self.start_requested = true;
    }

    /// Back to `Ready` with every collection cleared and the player at rest.
    /// Takes effect immediately.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.distance = 0.0;
        self.spawn_timer = self.tuning.spawn_grace_interval;
        self.obstacles.clear();
        self.effects.clear();
        self.player = Player::new(&self.tuning);
        self.pending.clear();
        self.start_requested = false;
        self.events.clear();
        self.events.push(GameEvent::Reset);
        log::info!("Run reset");
    }

    /// `Ready -> Playing`. No-op in any other phase.
    pub(crate) fn begin_playing(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Started);
            log::info!("Run started (seed {})", self.seed);
        }
    }

    /// Current score, derived from distance
    pub fn score(&self) -> u64 {
        (self.distance / self.tuning.score_divisor).floor() as u64
    }

    /// Current run speed
    pub fn speed(&self) -> f32 {
        super::physics::speed_for_distance(&self.tuning, self.distance)
    }

    /// Transition `Playing -> GameOver`, firing the death burst once
    pub(crate) fn game_over(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;

        let score = self.score();
        self.best_score = self.best_score.max(score);
        let center = self.player.center();
        self.effects
            .emit(super::effects::Recipe::DeathBurst, center, &mut self.fx_rng);
        self.events.push(GameEvent::GameOver { score });
        log::info!("Game over: score {} (best {})", score, self.best_score);
    }
}
