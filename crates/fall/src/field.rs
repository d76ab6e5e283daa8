//! The confetti field: owns the active particles and drives the frame cycle.
//!
//! One `tick` is one frame: clear the surface, roll the spawn chance,
//! advance and draw every particle, then cull everything that left the
//! bounds. Culling is two-phase — the surviving subset is computed after
//! the update/draw pass, never by removing mid-iteration.

use confetti_core::effect::Effect;
use confetti_core::error::EffectError;
use confetti_core::palette::Palette;
use confetti_core::params::{param_f64, param_usize};
use confetti_core::prng::Xorshift64;
use confetti_core::surface::Surface;
use serde_json::{json, Value};

use crate::particle::Particle;

/// Particles seeded by `start()`.
const DEFAULT_INITIAL_COUNT: usize = 100;
/// Per-frame probability of spawning one extra particle.
const DEFAULT_SPAWN_CHANCE: f64 = 0.1;
/// Distance above the top edge at which particles spawn, in pixels.
const DEFAULT_SPAWN_HEIGHT: f64 = 20.0;
/// Smallest particle diameter, in pixels.
const DEFAULT_MIN_SIZE: f64 = 5.0;
/// Largest particle diameter (exclusive), in pixels.
const DEFAULT_MAX_SIZE: f64 = 15.0;
/// Slowest fall speed, in pixels per frame.
const DEFAULT_MIN_FALL_SPEED: f64 = 1.0;
/// Fastest fall speed (exclusive), in pixels per frame.
const DEFAULT_MAX_FALL_SPEED: f64 = 3.0;
/// Linear drift speed bound, in pixels per frame (range is symmetric).
const DEFAULT_MAX_DRIFT: f64 = 1.0;
/// Rotation speed bound, in degrees per frame (range is symmetric).
const DEFAULT_MAX_SPIN: f64 = 1.0;
/// Largest swing amplitude (exclusive), in pixels.
const DEFAULT_MAX_SWING: f64 = 3.0;

/// Tunable constants for the falling-confetti field.
///
/// Use [`Default`] for the classic shower: 100 initial particles, a 10%
/// per-frame spawn chance, sizes in [5, 15).
#[derive(Debug, Clone, Copy)]
pub struct FallParams {
    /// Number of particles seeded by `start()`.
    pub initial_count: usize,
    /// Per-frame probability of spawning one extra particle.
    ///
    /// Deliberately per frame, not per second, so perceived density tracks
    /// the host's refresh rate.
    pub spawn_chance: f64,
    /// Distance above the top edge at which particles spawn, in pixels.
    pub spawn_height: f64,
    /// Smallest particle diameter, in pixels.
    pub min_size: f64,
    /// Largest particle diameter (exclusive), in pixels.
    pub max_size: f64,
    /// Slowest fall speed, in pixels per frame.
    pub min_fall_speed: f64,
    /// Fastest fall speed (exclusive), in pixels per frame.
    pub max_fall_speed: f64,
    /// Drift speed bound: linear horizontal speed lies in `[-max, max)`.
    pub max_drift: f64,
    /// Spin bound: rotation speed lies in `[-max, max)` degrees per frame.
    pub max_spin: f64,
    /// Largest swing amplitude (exclusive), in pixels.
    pub max_swing: f64,
}

impl Default for FallParams {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_INITIAL_COUNT,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            spawn_height: DEFAULT_SPAWN_HEIGHT,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            min_fall_speed: DEFAULT_MIN_FALL_SPEED,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
            max_drift: DEFAULT_MAX_DRIFT,
            max_spin: DEFAULT_MAX_SPIN,
            max_swing: DEFAULT_MAX_SWING,
        }
    }
}

impl FallParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            initial_count: param_usize(params, "initial_count", DEFAULT_INITIAL_COUNT),
            spawn_chance: param_f64(params, "spawn_chance", DEFAULT_SPAWN_CHANCE),
            spawn_height: param_f64(params, "spawn_height", DEFAULT_SPAWN_HEIGHT),
            min_size: param_f64(params, "min_size", DEFAULT_MIN_SIZE),
            max_size: param_f64(params, "max_size", DEFAULT_MAX_SIZE),
            min_fall_speed: param_f64(params, "min_fall_speed", DEFAULT_MIN_FALL_SPEED),
            max_fall_speed: param_f64(params, "max_fall_speed", DEFAULT_MAX_FALL_SPEED),
            max_drift: param_f64(params, "max_drift", DEFAULT_MAX_DRIFT),
            max_spin: param_f64(params, "max_spin", DEFAULT_MAX_SPIN),
            max_swing: param_f64(params, "max_swing", DEFAULT_MAX_SWING),
        }
    }
}

/// A falling-confetti field bound to one drawing surface's dimensions.
///
/// The field owns its particles exclusively; the only external mutation
/// points are `start`, `stop`, `tick`, and `resize`, all expected on the
/// host's single UI thread.
pub struct ConfettiFall {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    palette: Palette,
    rng: Xorshift64,
    params: FallParams,
    running: bool,
}

impl ConfettiFall {
    /// Creates a new field with the given bounds, seed, palette, and params.
    ///
    /// Returns `EffectError::InvalidDimensions` if either dimension is
    /// non-positive or non-finite.
    pub fn new(
        width: f64,
        height: f64,
        seed: u64,
        palette: Palette,
        params: FallParams,
    ) -> Result<Self, EffectError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(EffectError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            particles: Vec::with_capacity(params.initial_count),
            palette,
            rng: Xorshift64::new(seed),
            params,
            running: false,
        })
    }

    /// Creates a field from a JSON params object.
    ///
    /// Extracts the [`FallParams`] keys from the JSON, falling back to
    /// defaults for missing keys.
    pub fn from_json(
        width: f64,
        height: f64,
        seed: u64,
        palette: Palette,
        json_params: &Value,
    ) -> Result<Self, EffectError> {
        Self::new(width, height, seed, palette, FallParams::from_json(json_params))
    }

    /// Read-only access to the active particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current bounds width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current bounds height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Effect for ConfettiFall {
    fn start(&mut self) {
        // A restart replaces the shower rather than stacking a second batch.
        self.particles.clear();
        for _ in 0..self.params.initial_count {
            let p = Particle::spawn(&mut self.rng, &self.palette, self.width, &self.params);
            self.particles.push(p);
        }
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self, surface: &mut dyn Surface) -> Result<(), EffectError> {
        surface.clear();

        if self.rng.chance(self.params.spawn_chance) {
            let p = Particle::spawn(&mut self.rng, &self.palette, self.width, &self.params);
            self.particles.push(p);
        }

        for p in &mut self.particles {
            p.advance();
            surface.fill_shape(p.shape(), p.position, p.rotation, p.size, p.color);
        }

        // Two-phase cull: the draw pass above never removes.
        let (w, h) = (self.width, self.height);
        self.particles.retain(|p| !p.is_outside(w, h));

        Ok(())
    }

    fn resize(&mut self, width: f64, height: f64) {
        // Best-effort: a bogus resize event leaves the previous bounds in
        // place and self-heals on the next valid one. Particles are never
        // repositioned here; stragglers outside smaller bounds are culled
        // on the next tick.
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    fn params(&self) -> Value {
        json!({
            "initial_count": self.params.initial_count,
            "spawn_chance": self.params.spawn_chance,
            "spawn_height": self.params.spawn_height,
            "min_size": self.params.min_size,
            "max_size": self.params.max_size,
            "min_fall_speed": self.params.min_fall_speed,
            "max_fall_speed": self.params.max_fall_speed,
            "max_drift": self.params.max_drift,
            "max_spin": self.params.max_spin,
            "max_swing": self.params.max_swing,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "initial_count": {
                "type": "integer",
                "default": DEFAULT_INITIAL_COUNT,
                "min": 0,
                "max": 10000,
                "description": "Number of particles seeded by start()"
            },
            "spawn_chance": {
                "type": "number",
                "default": DEFAULT_SPAWN_CHANCE,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-frame probability of spawning one extra particle"
            },
            "spawn_height": {
                "type": "number",
                "default": DEFAULT_SPAWN_HEIGHT,
                "min": 0.0,
                "max": 1000.0,
                "description": "Distance above the top edge at which particles spawn"
            },
            "min_size": {
                "type": "number",
                "default": DEFAULT_MIN_SIZE,
                "min": 1.0,
                "max": 100.0,
                "description": "Smallest particle diameter in pixels"
            },
            "max_size": {
                "type": "number",
                "default": DEFAULT_MAX_SIZE,
                "min": 1.0,
                "max": 100.0,
                "description": "Largest particle diameter in pixels (exclusive)"
            },
            "min_fall_speed": {
                "type": "number",
                "default": DEFAULT_MIN_FALL_SPEED,
                "min": 0.0,
                "max": 50.0,
                "description": "Slowest fall speed in pixels per frame"
            },
            "max_fall_speed": {
                "type": "number",
                "default": DEFAULT_MAX_FALL_SPEED,
                "min": 0.0,
                "max": 50.0,
                "description": "Fastest fall speed in pixels per frame (exclusive)"
            },
            "max_drift": {
                "type": "number",
                "default": DEFAULT_MAX_DRIFT,
                "min": 0.0,
                "max": 50.0,
                "description": "Horizontal drift speed bound; drift lies in [-max, max)"
            },
            "max_spin": {
                "type": "number",
                "default": DEFAULT_MAX_SPIN,
                "min": 0.0,
                "max": 360.0,
                "description": "Rotation speed bound in degrees per frame; spin lies in [-max, max)"
            },
            "max_swing": {
                "type": "number",
                "default": DEFAULT_MAX_SWING,
                "min": 0.0,
                "max": 50.0,
                "description": "Largest swing amplitude in pixels (exclusive)"
            }
        })
    }
}
