//! One falling confetti particle.
//!
//! All of a particle's motion constants — size, color, velocity, spin, and
//! swing — are drawn once at spawn time and never change; only position and
//! rotation evolve, one [`advance`](Particle::advance) per frame.

use crate::field::FallParams;
use confetti_core::palette::Palette;
use confetti_core::prng::Xorshift64;
use confetti_core::surface::Shape;
use confetti_core::Srgb;
use glam::DVec2;

/// Divisor applied to the y position inside the swing sinusoid, so the
/// horizontal oscillation is slow relative to fall speed.
const SWING_PERIOD_SCALE: f64 = 100.0;

/// A single piece of confetti.
///
/// Fields are crate-visible so the field (and its tests) can stage exact
/// states; external callers read through the accessors.
#[derive(Debug, Clone)]
pub struct Particle {
    pub(crate) position: DVec2,
    pub(crate) size: f64,
    pub(crate) color: Srgb,
    /// Per-frame displacement: x is linear drift, y is fall speed.
    pub(crate) velocity: DVec2,
    /// Rotation angle in degrees.
    pub(crate) rotation: f64,
    /// Rotation speed in degrees per frame.
    pub(crate) spin: f64,
    /// Swing amplitude in pixels.
    pub(crate) swing: f64,
    /// Swing phase offset in radians.
    pub(crate) swing_phase: f64,
}

impl Particle {
    /// Spawns a particle just above the top edge at a random horizontal
    /// position in `[0, width)`.
    ///
    /// Every random attribute is drawn from the bounded ranges in `params`;
    /// a degenerate range (min == max) pins the attribute exactly.
    pub fn spawn(
        rng: &mut Xorshift64,
        palette: &Palette,
        width: f64,
        params: &FallParams,
    ) -> Particle {
        Particle {
            position: DVec2::new(rng.next_range(0.0, width), -params.spawn_height),
            size: rng.next_range(params.min_size, params.max_size),
            color: palette.pick(rng),
            velocity: DVec2::new(
                rng.next_range(-params.max_drift, params.max_drift),
                rng.next_range(params.min_fall_speed, params.max_fall_speed),
            ),
            rotation: rng.next_range(0.0, 360.0),
            spin: rng.next_range(-params.max_spin, params.max_spin),
            swing: rng.next_range(0.0, params.max_swing),
            swing_phase: rng.next_range(0.0, std::f64::consts::TAU),
        }
    }

    /// Advances position and rotation by one frame.
    ///
    /// The vertical position integrates first so the swing term sees the
    /// new height, then the horizontal position integrates linear drift
    /// plus `sin(y / 100 + phase) * amplitude`.
    pub fn advance(&mut self) {
        self.position.y += self.velocity.y;
        self.position.x += self.velocity.x
            + (self.position.y / SWING_PERIOD_SCALE + self.swing_phase).sin() * self.swing;
        self.rotation += self.spin;
    }

    /// Returns true once the particle has left the surface: below the
    /// bottom edge or past either side. Particles above the top are kept —
    /// that is where they spawn.
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.position.y > height || self.position.x < 0.0 || self.position.x > width
    }

    /// The shape this particle renders as at its current rotation.
    pub fn shape(&self) -> Shape {
        Shape::from_rotation(self.rotation)
    }

    /// Current position in pixels.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Diameter in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Assigned palette color.
    pub fn color(&self) -> Srgb {
        self.color
    }

    /// Current rotation angle in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_one(seed: u64, width: f64, params: &FallParams) -> Particle {
        let mut rng = Xorshift64::new(seed);
        let palette = Palette::festive();
        Particle::spawn(&mut rng, &palette, width, params)
    }

    // -- Spawn invariants --

    #[test]
    fn spawn_places_particle_above_top_edge() {
        let params = FallParams::default();
        for seed in 0..100 {
            let p = spawn_one(seed, 800.0, &params);
            assert_eq!(
                p.position.y, -20.0,
                "seed {seed}: spawn y should sit at -spawn_height"
            );
        }
    }

    #[test]
    fn spawn_x_within_surface_width() {
        let params = FallParams::default();
        for seed in 0..100 {
            let p = spawn_one(seed, 800.0, &params);
            assert!(
                (0.0..800.0).contains(&p.position.x),
                "seed {seed}: spawn x {} out of [0, 800)",
                p.position.x
            );
        }
    }

    #[test]
    fn spawn_size_within_configured_range() {
        let params = FallParams::default();
        for seed in 0..100 {
            let p = spawn_one(seed, 800.0, &params);
            assert!(
                (5.0..15.0).contains(&p.size),
                "seed {seed}: size {} out of [5, 15)",
                p.size
            );
        }
    }

    #[test]
    fn spawn_color_comes_from_palette() {
        let params = FallParams::default();
        let palette = Palette::festive();
        for seed in 0..100 {
            let p = spawn_one(seed, 800.0, &params);
            assert!(
                palette.colors().contains(&p.color),
                "seed {seed}: color {} not in palette",
                p.color.to_hex()
            );
        }
    }

    #[test]
    fn spawn_speeds_within_configured_ranges() {
        let params = FallParams::default();
        for seed in 0..100 {
            let p = spawn_one(seed, 800.0, &params);
            assert!((1.0..3.0).contains(&p.velocity.y), "fall speed {}", p.velocity.y);
            assert!((-1.0..1.0).contains(&p.velocity.x), "drift {}", p.velocity.x);
            assert!((-1.0..1.0).contains(&p.spin), "spin {}", p.spin);
            assert!((0.0..3.0).contains(&p.swing), "swing {}", p.swing);
            assert!(
                (0.0..std::f64::consts::TAU).contains(&p.swing_phase),
                "phase {}",
                p.swing_phase
            );
        }
    }

    #[test]
    fn degenerate_ranges_pin_attributes_exactly() {
        let params = FallParams {
            min_size: 10.0,
            max_size: 10.0,
            min_fall_speed: 2.0,
            max_fall_speed: 2.0,
            max_drift: 0.0,
            max_spin: 0.0,
            max_swing: 0.0,
            ..FallParams::default()
        };
        let p = spawn_one(42, 800.0, &params);
        assert_eq!(p.size, 10.0);
        assert_eq!(p.velocity.y, 2.0);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.spin, 0.0);
        assert_eq!(p.swing, 0.0);
    }

    // -- Advance --

    #[test]
    fn advance_integrates_fall_speed() {
        let params = FallParams {
            min_fall_speed: 2.0,
            max_fall_speed: 2.0,
            max_drift: 0.0,
            max_swing: 0.0,
            ..FallParams::default()
        };
        let mut p = spawn_one(1, 800.0, &params);
        let y0 = p.position.y;
        p.advance();
        assert_eq!(p.position.y, y0 + 2.0);
        p.advance();
        assert_eq!(p.position.y, y0 + 4.0);
    }

    #[test]
    fn advance_without_swing_moves_x_linearly() {
        let params = FallParams {
            max_swing: 0.0,
            ..FallParams::default()
        };
        let mut p = spawn_one(9, 800.0, &params);
        let x0 = p.position.x;
        let drift = p.velocity.x;
        p.advance();
        assert!((p.position.x - (x0 + drift)).abs() < 1e-12);
    }

    #[test]
    fn advance_swing_term_uses_updated_height() {
        let params = FallParams {
            min_fall_speed: 2.0,
            max_fall_speed: 2.0,
            max_drift: 0.0,
            ..FallParams::default()
        };
        let mut p = spawn_one(3, 800.0, &params);
        let expected_y = p.position.y + p.velocity.y;
        let expected_x = p.position.x
            + (expected_y / SWING_PERIOD_SCALE + p.swing_phase).sin() * p.swing;
        p.advance();
        assert_eq!(p.position.y, expected_y);
        assert!((p.position.x - expected_x).abs() < 1e-12);
    }

    #[test]
    fn advance_integrates_spin() {
        let params = FallParams::default();
        let mut p = spawn_one(17, 800.0, &params);
        let r0 = p.rotation;
        let spin = p.spin;
        p.advance();
        assert!((p.rotation - (r0 + spin)).abs() < 1e-12);
    }

    #[test]
    fn advance_never_touches_fixed_attributes() {
        let params = FallParams::default();
        let mut p = spawn_one(23, 800.0, &params);
        let (size, color, velocity, spin, swing, phase) =
            (p.size, p.color, p.velocity, p.spin, p.swing, p.swing_phase);
        for _ in 0..500 {
            p.advance();
        }
        assert_eq!(p.size, size);
        assert_eq!(p.color, color);
        assert_eq!(p.velocity, velocity);
        assert_eq!(p.spin, spin);
        assert_eq!(p.swing, swing);
        assert_eq!(p.swing_phase, phase);
    }

    // -- Bounds --

    #[test]
    fn is_outside_below_bottom_edge() {
        let mut p = spawn_one(5, 800.0, &FallParams::default());
        p.position = DVec2::new(400.0, 600.1);
        assert!(p.is_outside(800.0, 600.0));
        p.position = DVec2::new(400.0, 600.0);
        assert!(!p.is_outside(800.0, 600.0), "exactly on the edge is inside");
    }

    #[test]
    fn is_outside_past_either_side() {
        let mut p = spawn_one(5, 800.0, &FallParams::default());
        p.position = DVec2::new(-0.1, 100.0);
        assert!(p.is_outside(800.0, 600.0));
        p.position = DVec2::new(800.1, 100.0);
        assert!(p.is_outside(800.0, 600.0));
        p.position = DVec2::new(0.0, 100.0);
        assert!(!p.is_outside(800.0, 600.0));
        p.position = DVec2::new(800.0, 100.0);
        assert!(!p.is_outside(800.0, 600.0));
    }

    #[test]
    fn above_top_edge_is_not_outside() {
        // Fresh spawns sit above the surface and must survive the cull.
        let p = spawn_one(5, 800.0, &FallParams::default());
        assert!(p.position.y < 0.0);
        assert!(!p.is_outside(800.0, 600.0));
    }

    // -- Shape --

    #[test]
    fn shape_follows_rotation() {
        let mut p = spawn_one(5, 800.0, &FallParams::default());
        p.rotation = 0.0;
        assert_eq!(p.shape(), Shape::Square);
        p.rotation = 1.0;
        assert_eq!(p.shape(), Shape::Circle);
        p.rotation = 2.0;
        assert_eq!(p.shape(), Shape::Triangle);
        p.rotation = 3.9;
        assert_eq!(p.shape(), Shape::Square);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spawn_invariants_hold_for_any_seed_and_width(
                seed: u64,
                width in 1.0_f64..4000.0,
            ) {
                let params = FallParams::default();
                let p = spawn_one(seed, width, &params);
                prop_assert!(p.position.x >= 0.0 && p.position.x < width);
                prop_assert_eq!(p.position.y, -params.spawn_height);
                prop_assert!(p.size >= params.min_size && p.size < params.max_size);
            }

            #[test]
            fn spawned_particles_fall_monotonically(seed: u64) {
                let params = FallParams::default();
                let mut p = spawn_one(seed, 800.0, &params);
                let mut last_y = p.position.y;
                for _ in 0..100 {
                    p.advance();
                    prop_assert!(
                        p.position.y > last_y,
                        "fall speed is positive, y must strictly increase"
                    );
                    last_y = p.position.y;
                }
            }

            #[test]
            fn spawn_is_deterministic_for_same_seed(seed: u64) {
                let params = FallParams::default();
                let a = spawn_one(seed, 800.0, &params);
                let b = spawn_one(seed, 800.0, &params);
                prop_assert_eq!(a.position, b.position);
                prop_assert_eq!(a.size, b.size);
                prop_assert_eq!(a.color, b.color);
                prop_assert_eq!(a.velocity, b.velocity);
                prop_assert_eq!(a.rotation, b.rotation);
            }
        }
    }
}
