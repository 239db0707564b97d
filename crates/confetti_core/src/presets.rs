//! Named configuration bundles for common effects.
//!
//! Each preset is a partial [`ConfettiConfig`]; unspecified fields take the
//! documented defaults at resolution, so presets stay small and composable
//! (callers can override any field before firing).

use rand::Rng;

use crate::config::{ConfettiConfig, OriginConfig};
use crate::types::Shape;

/// Preset names accepted by [`by_name`], in display order.
/// `random_direction` is not listed: it samples at construction and so
/// needs an rng — use [`by_name_with_rng`] to look it up by name.
pub const NAMES: [&str; 9] = [
    "basic_cannon",
    "fireworks",
    "realistic",
    "stars",
    "snow",
    "left_cannon",
    "right_cannon",
    "bottom_cannon",
    "school_pride",
];

/// Look up a preset by its snake_case name
pub fn by_name(name: &str) -> Option<ConfettiConfig> {
    match name {
        "basic_cannon" => Some(basic_cannon()),
        "fireworks" => Some(fireworks()),
        "realistic" => Some(realistic()),
        "stars" => Some(stars()),
        "snow" => Some(snow()),
        "left_cannon" => Some(left_cannon()),
        "right_cannon" => Some(right_cannon()),
        "bottom_cannon" => Some(bottom_cannon()),
        "school_pride" => Some(school_pride()),
        _ => None,
    }
}

/// Like [`by_name`], but also covers the randomized presets
pub fn by_name_with_rng(name: &str, rng: &mut impl Rng) -> Option<ConfettiConfig> {
    match name {
        "random_direction" => Some(random_direction(rng)),
        _ => by_name(name),
    }
}

/// The default basic blast, slightly below center
pub fn basic_cannon() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(100),
        spread: Some(70.0),
        origin: Some(OriginConfig { y: Some(0.6), ..Default::default() }),
        ..Default::default()
    }
}

/// Full-circle burst with gentle decay, fireworks-style
pub fn fireworks() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(100),
        spread: Some(360.0),
        start_velocity: Some(30.0),
        decay: Some(0.94),
        scalar: Some(1.2),
        origin: Some(OriginConfig { y: Some(0.6), ..Default::default() }),
        ..Default::default()
    }
}

/// Dense cone tuned to avoid the flattened-cone look; fire it a few times
/// in quick succession for the full effect
pub fn realistic() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(100),
        spread: Some(70.0),
        start_velocity: Some(45.0),
        decay: Some(0.91),
        scalar: Some(1.0),
        origin: Some(OriginConfig { y: Some(0.7), ..Default::default() }),
        ..Default::default()
    }
}

/// Slow golden star burst
pub fn stars() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(50),
        spread: Some(360.0),
        start_velocity: Some(20.0),
        decay: Some(0.95),
        gravity: Some(0.5),
        shapes: Some(vec![Shape::Star]),
        scalar: Some(1.5),
        colors: Some(string_palette(&["#FFD700", "#FFA500", "#FFFF00"])),
        ..Default::default()
    }
}

/// White circles drifting down from the top edge
pub fn snow() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(60),
        angle: Some(270.0),
        spread: Some(120.0),
        start_velocity: Some(6.0),
        gravity: Some(0.4),
        decay: Some(0.98),
        drift: Some(0.4),
        duration_ms: Some(6000.0),
        shapes: Some(vec![Shape::Circle]),
        colors: Some(string_palette(&["#ffffff", "#e6f2ff", "#d9e8ff"])),
        origin: Some(OriginConfig { x: Some(0.5), y: Some(0.0) }),
        ..Default::default()
    }
}

/// Angled blast from the left edge
pub fn left_cannon() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(50),
        angle: Some(60.0),
        spread: Some(55.0),
        start_velocity: Some(55.0),
        origin: Some(OriginConfig { x: Some(0.0), y: Some(0.6) }),
        ..Default::default()
    }
}

/// Angled blast from the right edge
pub fn right_cannon() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(50),
        angle: Some(120.0),
        spread: Some(55.0),
        start_velocity: Some(55.0),
        origin: Some(OriginConfig { x: Some(1.0), y: Some(0.6) }),
        ..Default::default()
    }
}

/// Straight up from the bottom edge
pub fn bottom_cannon() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(50),
        angle: Some(90.0),
        spread: Some(45.0),
        start_velocity: Some(55.0),
        origin: Some(OriginConfig { x: Some(0.5), y: Some(1.0) }),
        ..Default::default()
    }
}

/// Two-tone team-colors blast from the bottom
pub fn school_pride() -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(120),
        angle: Some(90.0),
        spread: Some(100.0),
        start_velocity: Some(55.0),
        colors: Some(string_palette(&["#bb0000", "#ffffff"])),
        origin: Some(OriginConfig { x: Some(0.5), y: Some(0.9) }),
        ..Default::default()
    }
}

/// A random amount of confetti in a random direction. Sampled once at
/// construction from the supplied rng, so the bundle itself is plain data.
pub fn random_direction(rng: &mut impl Rng) -> ConfettiConfig {
    ConfettiConfig {
        particle_count: Some(rng.gen_range(200..300)),
        angle: Some(rng.gen_range(0.0..360.0)),
        spread: Some(rng.gen_range(180.0..360.0)),
        start_velocity: Some(rng.gen_range(30.0..50.0)),
        origin: Some(OriginConfig {
            x: Some(rng.gen_range(0.0..1.0)),
            y: Some(rng.gen_range(0.0..1.0) - 0.2),
        }),
        ..Default::default()
    }
}

fn string_palette(hex: &[&str]) -> Vec<String> {
    hex.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_named_preset_resolves() {
        for name in NAMES {
            let preset = by_name(name).unwrap_or_else(|| panic!("{name} missing"));
            preset.resolve().unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(by_name("confetti_tornado").is_none());
    }

    #[test]
    fn rng_lookup_covers_random_direction_and_the_static_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = by_name_with_rng("random_direction", &mut rng).unwrap();
        assert!((180.0..360.0).contains(&config.spread.unwrap()));

        // Static names fall through unchanged
        assert_eq!(by_name_with_rng("stars", &mut rng), Some(stars()));
        assert!(by_name_with_rng("confetti_tornado", &mut rng).is_none());
    }

    #[test]
    fn stars_uses_star_shapes_only() {
        let resolved = stars().resolve().unwrap();
        assert_eq!(resolved.shapes, vec![Shape::Star]);
        assert_eq!(resolved.colors.len(), 3);
    }

    #[test]
    fn random_direction_stays_in_documented_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let config = random_direction(&mut rng);
            let resolved = config.resolve().unwrap();
            assert!((200..300).contains(&resolved.particle_count));
            assert!((0.0..360.0).contains(&resolved.angle));
            assert!((180.0..360.0).contains(&resolved.spread));
        }
    }
}
