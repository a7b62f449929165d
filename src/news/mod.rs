//! # News items and priorities.
//!
//! This module provides the value types carried through a broadcast:
//! - [`News`] - an immutable published item (id, title, content, category,
//!   priority, timestamp)
//! - [`Priority`] - the closed severity enumeration (BREAKING > URGENT > NORMAL)

mod item;
mod priority;

pub use item::News;
pub use priority::Priority;
