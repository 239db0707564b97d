use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfettiError;

/// Shapes a particle can be drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Rectangular strip, the classic confetti piece
    Square,
    /// Perfect circle (snow, dots)
    Circle,
    /// Star glyph
    Star,
}

/// Straight-alpha color in linear [0, 1] components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse(s: &str) -> Result<Self, ConfettiError> {
        let invalid = || ConfettiError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |i: usize| -> Result<f32, ConfettiError> {
            let v = u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid())?;
            Ok(v as f32 / 255.0)
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| -> Result<f32, ConfettiError> {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid())?;
                    Ok((v * 17) as f32 / 255.0)
                };
                Ok(Self { r: nibble(0)?, g: nibble(1)?, b: nibble(2)?, a: 1.0 })
            }
            6 => Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: 1.0 }),
            8 => Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => Err(invalid()),
        }
    }
}

/// Host viewport in pixels; configuration origins are normalized against it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One live confetti piece.
///
/// Coordinates are screen pixels with y growing downward; velocities are
/// px per tick (1/60 s). Owned exclusively by the burst controller from
/// creation to eviction and mutated in place by the integrator each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Process-unique identity; never reused within or across batches
    pub id: Uuid,
    pub shape: Shape,
    pub color: ColorRgba,
    /// Integrated position (px)
    pub x: f32,
    pub y: f32,
    /// Strip dimensions (px); height is deliberately shorter than width
    pub width: f32,
    pub height: f32,
    /// Velocity (px per tick); negative vy is upward
    pub vx: f32,
    pub vy: f32,
    /// Rotation in degrees and its per-tick velocity
    pub rotation: f32,
    pub rotation_velocity: f32,
    /// Wobble phase (radians) and its fixed per-particle speed
    pub wobble: f32,
    pub wobble_speed: f32,
    /// Tilt phase (radians) with its sine/cosine cached per step
    pub tilt_angle: f32,
    pub tilt_sin: f32,
    pub tilt_cos: f32,
    /// Fixed radius of the tilt offset circle (px)
    pub tilt_radius: f32,
    /// Linear fade from 1 at spawn to 0 at end of life
    pub opacity: f32,
}
