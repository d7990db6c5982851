//! Transient visual effects: particles, attack arcs and camera shake
//!
//! Effects are driven by gameplay events but never feed back into physics or
//! collision. Every entry expires on its own; [`Effects::tick`] runs every step
//! regardless of the game phase.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Downward acceleration on particles only (pixels/s²)
pub const PARTICLE_GRAVITY: f32 = 200.0;
/// Trauma lost per second
pub const SHAKE_DECAY: f32 = 2.5;
/// Offset in pixels at full trauma
pub const SHAKE_MAX_OFFSET: f32 = 5.0;
/// Lifetime of the attack arc visual (seconds)
pub const ATTACK_ARC_LIFETIME: f32 = 0.22;

/// Particle color tags (neon palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    NeonBlue,
    NeonPink,
    NeonPurple,
    NeonOrange,
    Gold,
    White,
}

impl Palette {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Palette::NeonBlue => [0x00, 0xf0, 0xff],
            Palette::NeonPink => [0xff, 0x3e, 0x6c],
            Palette::NeonPurple => [0xb3, 0x47, 0xff],
            Palette::NeonOrange => [0xff, 0x8c, 0x21],
            Palette::Gold => [0xff, 0xee, 0x88],
            Palette::White => [0xff, 0xff, 0xff],
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    /// Lifetime at spawn, for the fade ratio
    pub max_life: f32,
    pub color: Palette,
    pub size: f32,
}

impl Particle {
    /// Remaining fraction of life in [0, 1] (drives alpha and size)
    pub fn life_ratio(&self) -> f32 {
        crate::unit_ratio(self.life, 0.0, self.max_life)
    }
}

/// Sweep visual left by an attack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackArc {
    pub pos: Vec2,
    pub life: f32,
    pub max_life: f32,
}

impl AttackArc {
    /// Sweep progress in [0, 1], 0 at spawn
    pub fn progress(&self) -> f32 {
        1.0 - crate::unit_ratio(self.life, 0.0, self.max_life)
    }
}

/// Camera shake as a decaying trauma value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shake {
    /// Trauma in [0, 1]
    pub trauma: f32,
    /// Jitter for this step, already scaled by `magnitude()`
    pub offset: Vec2,
}

impl Shake {
    /// Raise trauma by `amount`, stopping at `ceiling`. Never lowers trauma.
    pub fn add(&mut self, amount: f32, ceiling: f32) {
        if self.trauma < ceiling {
            self.trauma = (self.trauma + amount).min(ceiling).min(1.0);
        }
    }

    /// Quadratic falloff of trauma
    pub fn magnitude(&self) -> f32 {
        self.trauma * self.trauma
    }

    fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        self.trauma = (self.trauma - dt * SHAKE_DECAY).max(0.0);
        let magnitude = self.magnitude();
        self.offset = if magnitude > 0.0 {
            Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
                * magnitude
                * SHAKE_MAX_OFFSET
        } else {
            Vec2::ZERO
        };
    }
}

/// How a recipe's particles leave the emit point
#[derive(Debug, Clone, Copy)]
pub enum Spray {
    /// Independent velocity ranges per axis
    Drift { vx: (f32, f32), vy: (f32, f32) },
    /// Direction drawn from an angle range (radians, +y down), plus a
    /// constant vertical bias
    Cone {
        angle: (f32, f32),
        speed: (f32, f32),
        lift: f32,
    },
}

/// Shake applied when a recipe fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShakeImpulse {
    Add { amount: f32, ceiling: f32 },
    Max,
}

/// Parameters of a particle burst
#[derive(Debug, Clone, Copy)]
pub struct RecipeParams {
    pub count: usize,
    pub spray: Spray,
    /// Horizontal spawn jitter (+/-)
    pub jitter_x: f32,
    pub lifetime: (f32, f32),
    pub size: (f32, f32),
    pub palette: &'static [Palette],
    pub shake: Option<ShakeImpulse>,
}

/// Particle bursts triggered by gameplay events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipe {
    /// Footstep while grounded
    Dust,
    /// Take-off, upward cone
    JumpBurst,
    /// Attack trigger, forward cone
    AttackSparks,
    /// Enemy destroyed by an attack, radial
    KillBurst,
    /// Player death, radial
    DeathBurst,
}

impl Recipe {
    pub fn params(&self) -> RecipeParams {
        use Palette::*;
        match self {
            Recipe::Dust => RecipeParams {
                count: 3,
                spray: Spray::Drift {
                    vx: (-40.0, -15.0),
                    vy: (-80.0, -30.0),
                },
                jitter_x: 2.0,
                lifetime: (0.2, 0.5),
                size: (1.0, 2.5),
                palette: &[NeonBlue],
                shake: None,
            },
            Recipe::JumpBurst => RecipeParams {
                count: 8,
                spray: Spray::Cone {
                    angle: (-PI * 0.9, -PI * 0.1),
                    speed: (40.0, 120.0),
                    lift: 0.0,
                },
                jitter_x: 0.0,
                lifetime: (0.2, 0.5),
                size: (1.5, 3.0),
                palette: &[NeonBlue, NeonPurple, NeonPink],
                shake: None,
            },
            Recipe::AttackSparks => RecipeParams {
                count: 12,
                spray: Spray::Cone {
                    angle: (-0.6, 0.6),
                    speed: (60.0, 200.0),
                    lift: -30.0,
                },
                jitter_x: 0.0,
                lifetime: (0.15, 0.4),
                size: (1.0, 3.0),
                palette: &[NeonPink, NeonOrange, White],
                shake: Some(ShakeImpulse::Add {
                    amount: 0.15,
                    ceiling: 0.6,
                }),
            },
            Recipe::KillBurst => RecipeParams {
                count: 18,
                spray: Spray::Cone {
                    angle: (0.0, TAU),
                    speed: (40.0, 160.0),
                    lift: 0.0,
                },
                jitter_x: 0.0,
                lifetime: (0.2, 0.6),
                size: (1.5, 3.5),
                palette: &[NeonPink, NeonOrange, Gold, White],
                shake: Some(ShakeImpulse::Add {
                    amount: 0.4,
                    ceiling: 1.0,
                }),
            },
            Recipe::DeathBurst => RecipeParams {
                count: 25,
                spray: Spray::Cone {
                    angle: (0.0, TAU),
                    speed: (30.0, 180.0),
                    lift: 0.0,
                },
                jitter_x: 0.0,
                lifetime: (0.3, 0.8),
                size: (1.5, 4.0),
                palette: &[NeonPurple, NeonPink, NeonBlue, White],
                shake: Some(ShakeImpulse::Max),
            },
        }
    }
}

#[inline]
fn draw(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    debug_assert!(lo <= hi, "empty range {lo}..{hi}");
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

/// All live effects, owned by the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub arcs: Vec<AttackArc>,
    pub shake: Shake,
    /// Live particle cap; bursts past it are truncated
    pub max_particles: usize,
}

impl Effects {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            arcs: Vec::new(),
            shake: Shake::default(),
            max_particles,
        }
    }

    /// Fire a recipe at `origin`: spawn its burst and apply its shake
    pub fn emit(&mut self, recipe: Recipe, origin: Vec2, rng: &mut impl Rng) {
        let params = recipe.params();

        for _ in 0..params.count {
            if self.particles.len() >= self.max_particles {
                break;
            }

            let vel = match params.spray {
                Spray::Drift { vx, vy } => Vec2::new(draw(rng, vx), draw(rng, vy)),
                Spray::Cone { angle, speed, lift } => {
                    let angle = draw(rng, angle);
                    let speed = draw(rng, speed);
                    Vec2::new(angle.cos() * speed, angle.sin() * speed + lift)
                }
            };
            let jitter = draw(rng, (-params.jitter_x, params.jitter_x));
            let life = draw(rng, params.lifetime);
            let size = draw(rng, params.size);
            let color = params.palette[rng.random_range(0..params.palette.len())];

            self.particles.push(Particle {
                pos: origin + Vec2::new(jitter, 0.0),
                vel,
                life,
                max_life: life,
                color,
                size,
            });
        }

        match params.shake {
            Some(ShakeImpulse::Add { amount, ceiling }) => self.shake.add(amount, ceiling),
            Some(ShakeImpulse::Max) => self.shake.trauma = 1.0,
            None => {}
        }
    }

    /// Leave an attack sweep visual at `pos`
    pub fn spawn_attack_arc(&mut self, pos: Vec2) {
        self.arcs.push(AttackArc {
            pos,
            life: ATTACK_ARC_LIFETIME,
            max_life: ATTACK_ARC_LIFETIME,
        });
    }

    /// Advance every effect and drop the expired ones
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        if dt <= 0.0 {
            return;
        }

        self.shake.tick(dt, rng);

        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel * dt;
            particle.vel.y += PARTICLE_GRAVITY * dt;
            particle.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);

        for arc in self.arcs.iter_mut() {
            arc.life -= dt;
        }
        self.arcs.retain(|a| a.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.arcs.clear();
        self.shake = Shake::default();
    }
}
