//! Error types for structured error handling.
//!
//! This module provides:
//! - `RangeError`: Errors from ranged sampling operations
//! - `CharSetError`: Errors from character-set construction

use std::fmt;

use thiserror::Error;

/// Ranged sampling errors.
///
/// Raised synchronously when a caller passes an inclusive minimum that
/// exceeds the exclusive maximum. No entropy is consumed before the
/// validation fires, so a failed call has no side effects.
///
/// # Examples
/// ```
/// use entropy_core::types::RangeError;
///
/// let err = RangeError::invalid(10, 5);
/// assert_eq!(format!("{}", err), "invalid range: min 10 exceeds max 5");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeError {
    /// Inclusive minimum exceeds exclusive maximum.
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// The offending inclusive minimum, formatted.
        min: String,
        /// The offending exclusive maximum, formatted.
        max: String,
    },
}

impl RangeError {
    /// Builds an [`RangeError::InvalidRange`] from any displayable pair of
    /// bounds. Bounds are captured as text so one error type covers every
    /// numeric domain.
    pub fn invalid<T: fmt::Display>(min: T, max: T) -> Self {
        RangeError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Character-set construction errors.
///
/// # Variants
/// - `Empty`: the set contains no characters, so no draw is possible
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharSetError {
    /// The character set contains no characters.
    #[error("character set is empty")]
    Empty,
}
