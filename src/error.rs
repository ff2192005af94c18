/// Validation failures surfaced while building a plot, before anything is rendered.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Range bounds are inverted or not finite.
    #[error("Invalid range: min {min} must not exceed max {max}")]
    InvalidRange { min: f32, max: f32 },

    /// A negative number of random points was requested.
    #[error("Invalid point count: {0} (must not be negative)")]
    InvalidCount(i64),

    /// Scale bounds that do not enclose the starting scale of 1.
    #[error("Invalid scale bounds: [{min}, {max}] must be ordered and contain the starting scale 1")]
    InvalidScaleBounds { min: f32, max: f32 },

    /// Color text that is not six hex digits.
    #[error("Invalid color {0:?}: expected #rrggbb, rrggbb or 0xrrggbb")]
    InvalidColor(String),
}
