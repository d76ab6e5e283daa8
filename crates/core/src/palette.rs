//! Discrete color palettes, sampled by uniform random pick.
//!
//! Unlike gradient palettes, confetti colors are never interpolated: each
//! particle is assigned one stop from a small fixed set at spawn time and
//! keeps it for life. A handful of built-in sets are available by name for
//! the CLI and browser frontends.

use crate::color::Srgb;
use crate::error::EffectError;
use crate::prng::Xorshift64;

/// Names of all built-in palettes, in `list_names()` order.
const PALETTE_NAMES: &[&str] = &["festive", "pastel", "neon", "gold", "winter"];

/// A non-empty set of discrete colors, sampled by uniform random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a new palette from a vector of colors.
    ///
    /// Requires at least one color.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, EffectError> {
        if colors.is_empty() {
            return Err(EffectError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    /// Requires at least one color.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, EffectError> {
        if hexes.is_empty() {
            return Err(EffectError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        let colors: Result<Vec<Srgb>, EffectError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Returns the number of color stops in this palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if this palette has no colors. (Always false for valid palettes.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Read-only access to the color stops.
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Picks one color uniformly at random.
    pub fn pick(&self, rng: &mut Xorshift64) -> Srgb {
        self.colors[rng.next_usize(self.colors.len())]
    }

    // -- Named lookup --

    /// Constructs a built-in palette by name.
    ///
    /// Returns `EffectError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, EffectError> {
        match name {
            "festive" => Ok(Self::festive()),
            "pastel" => Ok(Self::pastel()),
            "neon" => Ok(Self::neon()),
            "gold" => Ok(Self::gold()),
            "winter" => Ok(Self::winter()),
            _ => Err(EffectError::UnknownPalette(name.to_string())),
        }
    }

    /// Returns a slice of all built-in palette names.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    // -- Built-in palettes --

    /// Bright celebration mix: pinks, oranges, purples, mint.
    pub fn festive() -> Self {
        Self::from_hex(&[
            "#ff577f", "#ff884b", "#ffdeb4", "#ffc764", "#b983ff", "#94b3fd", "#57cc99", "#ffd6ec",
        ])
        .expect("festive palette hex values are valid")
    }

    /// Soft pinks, mints, and creams.
    pub fn pastel() -> Self {
        Self::from_hex(&["#ffd6ec", "#c1f0dc", "#c5dff8", "#fff3c7", "#e2d4f0"])
            .expect("pastel palette hex values are valid")
    }

    /// Vibrant pinks, greens, yellows.
    pub fn neon() -> Self {
        Self::from_hex(&["#ff00ff", "#00ff41", "#ffff00", "#ff0080", "#00ffff"])
            .expect("neon palette hex values are valid")
    }

    /// Golds and warm yellows.
    pub fn gold() -> Self {
        Self::from_hex(&["#ffd700", "#ffc764", "#e6b800", "#fff1b8", "#d4af37"])
            .expect("gold palette hex values are valid")
    }

    /// Icy blues, mints, and white.
    pub fn winter() -> Self {
        Self::from_hex(&["#a0e7e5", "#b4f8c8", "#c5dff8", "#ffffff", "#94b3fd"])
            .expect("winter palette hex values are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction tests --

    #[test]
    fn new_with_empty_vec_returns_error() {
        let result = Palette::new(vec![]);
        assert!(matches!(result, Err(EffectError::InvalidPalette(_))));
    }

    #[test]
    fn new_with_one_color_succeeds() {
        let palette = Palette::new(vec![Srgb::new(255, 0, 0)]).unwrap();
        assert_eq!(palette.len(), 1);
        assert!(!palette.is_empty());
    }

    #[test]
    fn from_hex_with_valid_colors_succeeds() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn from_hex_with_empty_slice_returns_error() {
        assert!(Palette::from_hex(&[]).is_err());
    }

    #[test]
    fn from_hex_with_invalid_hex_returns_error() {
        let result = Palette::from_hex(&["#ff0000", "#zzzzzz"]);
        assert!(matches!(result, Err(EffectError::InvalidColor(_))));
    }

    // -- Pick tests --

    #[test]
    fn pick_returns_member_of_palette() {
        let palette = Palette::festive();
        let mut rng = Xorshift64::new(42);
        for _ in 0..1000 {
            let color = palette.pick(&mut rng);
            assert!(
                palette.colors().contains(&color),
                "picked color {} not in palette",
                color.to_hex()
            );
        }
    }

    #[test]
    fn pick_from_single_color_palette_always_returns_it() {
        let only = Srgb::new(0x57, 0xcc, 0x99);
        let palette = Palette::new(vec![only]).unwrap();
        let mut rng = Xorshift64::new(7);
        for _ in 0..100 {
            assert_eq!(palette.pick(&mut rng), only);
        }
    }

    #[test]
    fn pick_is_deterministic_for_same_seed() {
        let palette = Palette::festive();
        let mut rng_a = Xorshift64::new(555);
        let mut rng_b = Xorshift64::new(555);
        for _ in 0..100 {
            assert_eq!(palette.pick(&mut rng_a), palette.pick(&mut rng_b));
        }
    }

    #[test]
    fn pick_eventually_covers_every_stop() {
        let palette = Palette::festive();
        let mut rng = Xorshift64::new(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            seen.insert(palette.pick(&mut rng));
        }
        assert_eq!(
            seen.len(),
            palette.len(),
            "10000 picks should cover all {} stops",
            palette.len()
        );
    }

    // -- Named lookup tests --

    #[test]
    fn from_name_resolves_every_listed_palette() {
        for name in Palette::list_names() {
            let palette = Palette::from_name(name)
                .unwrap_or_else(|e| panic!("listed palette {name} failed to resolve: {e}"));
            assert!(palette.len() >= 2, "{name} has only {} colors", palette.len());
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = Palette::from_name("disco");
        assert!(matches!(result, Err(EffectError::UnknownPalette(_))));
    }

    #[test]
    fn list_names_includes_festive_first() {
        assert_eq!(Palette::list_names().first(), Some(&"festive"));
    }

    #[test]
    fn festive_has_eight_colors() {
        assert_eq!(Palette::festive().len(), 8);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pick_always_in_bounds_for_any_seed(seed: u64) {
                let palette = Palette::festive();
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let color = palette.pick(&mut rng);
                    prop_assert!(palette.colors().contains(&color));
                }
            }

            #[test]
            fn arbitrary_palettes_pick_their_own_members(
                seed: u64,
                stops in proptest::collection::vec(any::<(u8, u8, u8)>(), 1..16),
            ) {
                let colors: Vec<Srgb> =
                    stops.iter().map(|&(r, g, b)| Srgb::new(r, g, b)).collect();
                let palette = Palette::new(colors).unwrap();
                let mut rng = Xorshift64::new(seed);
                for _ in 0..50 {
                    let color = palette.pick(&mut rng);
                    prop_assert!(palette.colors().contains(&color));
                }
            }
        }
    }
}
