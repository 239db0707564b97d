use thiserror::Error;

/// Errors surfaced while resolving a configuration or spawning a burst.
/// A failed `fire` aborts that call only; the active set is never touched
/// before resolution and spawning have both succeeded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfettiError {
    /// The color palette resolved to an empty list.
    #[error("color palette is empty")]
    EmptyColors,

    /// The shape set resolved to an empty list.
    #[error("shape set is empty")]
    EmptyShapes,

    /// A palette entry could not be parsed as a hex color.
    #[error("unrecognized color {0:?} (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    /// A numeric field was outside its valid range.
    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        /// The configuration field that failed validation.
        field: &'static str,
        /// Human-readable constraint, e.g. "positive".
        requirement: &'static str,
        /// The offending value.
        value: f32,
    },
}
