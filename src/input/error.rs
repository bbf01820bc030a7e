//! Errors for gesture readings rejected at the input boundary.

use thiserror::Error;

/// A gesture reading that cannot be applied to transform state.
///
/// Transform updates are incremental, so a single `NaN` would poison every
/// later value. Readings are checked before they reach the resolver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    /// A field is `NaN` or infinite.
    #[error("gesture field `{field}` is not finite: {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was read.
        value: f64,
    },

    /// Scale readings are ratios and must be positive.
    #[error("gesture scale must be positive, not {0}")]
    NonPositiveScale(f64),
}
