//! Error types for the newswire crate.
//!
//! Normal operation defines no recoverable error paths: constructing a
//! [`News`](crate::News) or a subscriber cannot fail, and registry
//! operations are no-ops rather than errors when the identity is already
//! present or absent. The only fallible surface is parsing a textual
//! priority name into the closed [`Priority`](crate::Priority) enumeration.

use thiserror::Error;

/// Returned when a string does not name a known priority level.
///
/// # Example
/// ```
/// use newswire::Priority;
///
/// let err = "critical".parse::<Priority>().unwrap_err();
/// assert!(err.to_string().contains("critical"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown priority {0:?} (expected one of: breaking, urgent, normal)")]
pub struct ParsePriorityError(pub String);
