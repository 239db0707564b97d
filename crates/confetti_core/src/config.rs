use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLORS, TICKS_PER_SECOND};
use crate::error::ConfettiError;
use crate::types::{ColorRgba, Shape};

/// Partial burst configuration: any subset of recognized fields.
/// Fields left `None` fall back to the documented defaults at resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Number of pieces to launch (default 50)
    pub particle_count: Option<u32>,
    /// Launch angle in degrees, 90 = straight up (default 90)
    pub angle: Option<f32>,
    /// Angular spread around the launch angle, degrees (default 45)
    pub spread: Option<f32>,
    /// Initial speed in px per tick (default 45)
    pub start_velocity: Option<f32>,
    /// Per-tick velocity damping multiplier (default 0.9)
    pub decay: Option<f32>,
    /// Downward acceleration per tick (default 1)
    pub gravity: Option<f32>,
    /// Horizontal acceleration per tick (default 0)
    pub drift: Option<f32>,
    /// Total lifetime in milliseconds (default 3000)
    pub duration_ms: Option<f32>,
    /// Lifetime as a 60 Hz tick count; reconciled against `duration_ms`
    pub ticks: Option<u32>,
    /// Alternate spelling of `ticks`; `ticks` wins when both are set
    pub tick_duration: Option<u32>,
    /// Hex color palette (default: the 19-color `DEFAULT_COLORS` set)
    pub colors: Option<Vec<String>>,
    /// Particle size multiplier (default 1)
    pub scalar: Option<f32>,
    /// Normalized launch origin, merged field-by-field over (0.5, 0.5)
    pub origin: Option<OriginConfig>,
    /// Shape pool to draw from (default `[Square]`)
    pub shapes: Option<Vec<Shape>>,
    /// Whether pieces tumble with the tilt overlay (default true)
    pub tilt: Option<bool>,
    /// Upper bound of the random initial tilt phase (default 10)
    pub tilt_angle_increment: Option<f32>,
}

/// Partial launch origin; both axes normalized to [0, 1] of the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginConfig {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// Normalized launch origin after merging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

/// Fully-populated, validated configuration. Immutable once resolved;
/// every particle of a burst shares one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub particle_count: u32,
    pub angle: f32,
    pub spread: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub duration_ms: f32,
    pub ticks: u32,
    pub colors: Vec<ColorRgba>,
    pub scalar: f32,
    pub origin: Origin,
    pub shapes: Vec<Shape>,
    pub tilt: bool,
    pub tilt_angle_increment: f32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let duration_ms = 3000.0;
        Self {
            particle_count: 50,
            angle: 90.0,
            spread: 45.0,
            start_velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            duration_ms,
            ticks: ticks_from_duration(duration_ms),
            colors: DEFAULT_COLORS
                .iter()
                .map(|hex| ColorRgba::parse(hex).unwrap())
                .collect(),
            scalar: 1.0,
            origin: Origin { x: 0.5, y: 0.5 },
            shapes: vec![Shape::Square],
            tilt: true,
            tilt_angle_increment: 10.0,
        }
    }
}

fn ticks_from_duration(duration_ms: f32) -> u32 {
    ((duration_ms / 1000.0 * TICKS_PER_SECOND).round() as u32).max(1)
}

fn duration_from_ticks(ticks: u32) -> f32 {
    (ticks as f32 / TICKS_PER_SECOND * 1000.0).round()
}

impl ConfettiConfig {
    /// Merge this partial configuration over the defaults, reconcile the
    /// tick/duration pair, and validate ranges.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfettiError> {
        let defaults = ResolvedConfig::default();

        // Both tick spellings normalize into the one canonical pair.
        // Duration and tick count stay mutually consistent whichever was
        // supplied; when both are given verbatim values win.
        let tick_input = self.ticks.or(self.tick_duration);
        let (duration_ms, ticks) = match (self.duration_ms, tick_input) {
            (Some(d), Some(t)) => (d, t),
            (None, Some(t)) => (duration_from_ticks(t), t),
            (Some(d), None) => (d, ticks_from_duration(d)),
            (None, None) => (defaults.duration_ms, defaults.ticks),
        };

        let origin = {
            let partial = self.origin.unwrap_or_default();
            Origin {
                x: partial.x.unwrap_or(defaults.origin.x),
                y: partial.y.unwrap_or(defaults.origin.y),
            }
        };

        let colors = match &self.colors {
            Some(list) => list
                .iter()
                .map(|hex| ColorRgba::parse(hex))
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.colors,
        };

        let resolved = ResolvedConfig {
            particle_count: self.particle_count.unwrap_or(defaults.particle_count),
            angle: self.angle.unwrap_or(defaults.angle),
            spread: self.spread.unwrap_or(defaults.spread),
            start_velocity: self.start_velocity.unwrap_or(defaults.start_velocity),
            decay: self.decay.unwrap_or(defaults.decay),
            gravity: self.gravity.unwrap_or(defaults.gravity),
            drift: self.drift.unwrap_or(defaults.drift),
            duration_ms,
            ticks,
            colors,
            scalar: self.scalar.unwrap_or(defaults.scalar),
            origin,
            shapes: self.shapes.clone().unwrap_or(defaults.shapes),
            tilt: self.tilt.unwrap_or(defaults.tilt),
            tilt_angle_increment: self
                .tilt_angle_increment
                .unwrap_or(defaults.tilt_angle_increment),
        };

        resolved.validate()?;
        Ok(resolved)
    }
}

impl ResolvedConfig {
    /// Range validation. Negated comparisons so NaN fails too.
    fn validate(&self) -> Result<(), ConfettiError> {
        let positive = |field, value: f32| {
            if !(value > 0.0) {
                return Err(ConfettiError::OutOfRange {
                    field,
                    requirement: "positive",
                    value,
                });
            }
            Ok(())
        };
        let non_negative = |field, value: f32| {
            if !(value >= 0.0) {
                return Err(ConfettiError::OutOfRange {
                    field,
                    requirement: "non-negative",
                    value,
                });
            }
            Ok(())
        };

        positive("duration_ms", self.duration_ms)?;
        positive("decay", self.decay)?;
        positive("scalar", self.scalar)?;
        non_negative("spread", self.spread)?;
        non_negative("start_velocity", self.start_velocity)?;
        non_negative("tilt_angle_increment", self.tilt_angle_increment)?;
        if self.ticks == 0 {
            return Err(ConfettiError::OutOfRange {
                field: "ticks",
                requirement: "at least 1",
                value: 0.0,
            });
        }
        if self.colors.is_empty() {
            return Err(ConfettiError::EmptyColors);
        }
        if self.shapes.is_empty() {
            return Err(ConfettiError::EmptyShapes);
        }
        Ok(())
    }
}
