//! # Registry and broadcast dispatcher.
//!
//! This module provides:
//! - [`Agency`] - the public dispatcher (subscribe, unsubscribe, publish,
//!   subscriber count)
//! - `SubscriberRegistry` (crate-private) - the identity-keyed,
//!   insertion-ordered subscriber set behind a `tokio::sync::RwLock`

mod core;
mod registry;

pub use core::Agency;
