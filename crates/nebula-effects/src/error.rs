//! Effect configuration errors.

use thiserror::Error;

/// Errors returned when an effect is built from invalid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    /// A duration was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeDuration {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// A radius was outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    RadiusOutOfRange {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// The minimum bolt radius exceeded the maximum.
    #[error("bolt_radius_min ({min}) exceeds bolt_radius_max ({max})")]
    BoltRadiusInverted {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },

    /// A value was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
}
