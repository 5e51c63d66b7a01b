//! Error types for the demeter-mock crate.

/// Error type for all fallible operations in the demeter-mock crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// Returned when the per-combination product count range is invalid.
    #[error("invalid products per combination: min {min}, max {max} (need 1 <= min <= max)")]
    InvalidPerCombo {
        /// The configured minimum products per combination.
        min: u32,
        /// The configured maximum products per combination.
        max: u32,
    },
}
