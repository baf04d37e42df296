//! Error types for configuration, validation and setup failures
//!
//! Grid queries and generation itself never fail; these errors cover the
//! surfaces around them: rejected generator settings, layouts that fail a
//! connectivity audit, and logging setup.

use std::fmt;

/// Main error type for all fallible crate operations
#[derive(Debug)]
pub enum DungeonError {
    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A generated layout has rooms that cannot reach each other
    DisconnectedLayout {
        /// Seed that produced the layout
        seed: u64,
        /// Number of separate floor regions found
        regions: usize,
    },

    /// Installing the tracing subscriber failed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DisconnectedLayout { seed, regions } => {
                write!(
                    f,
                    "Layout for seed {seed} is disconnected ({regions} floor regions)"
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialise logging: {reason}")
            }
        }
    }
}

impl std::error::Error for DungeonError {}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, DungeonError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DungeonError {
    DungeonError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
