//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging notification channels
//! into an [`Agency`](crate::Agency). Each subscriber filters incoming news
//! by its own interests and renders a notification only for items it
//! accepts.
//!
//! ## Contract
//! - [`Subscribe::update`] is awaited sequentially during a broadcast; the
//!   publishing call does not return until every subscriber has run.
//! - [`Subscribe::id`] must be stable for the subscriber's lifetime — it is
//!   the registry dedup key, derived from the subscriber's own fields.
//!
//! ## Example (skeleton)
//! ```
//! use newswire::{News, Subscribe};
//! use async_trait::async_trait;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Subscribe for Audit {
//!     async fn update(&self, news: &News) {
//!         println!("AUDIT {news}");
//!     }
//!     fn id(&self) -> String {
//!         "audit:singleton".to_string()
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::news::News;

/// Shared handle to a subscriber (`Arc<dyn Subscribe>`).
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Contract for news subscribers.
///
/// Called from the agency's broadcast loop. Implementations inspect the item
/// and conditionally render a notification; filtering is entirely the
/// subscriber's concern.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle one published item, rendering a notification if it matches
    /// this subscriber's interests.
    async fn update(&self, news: &News);

    /// Stable identity string, unique within a registry.
    ///
    /// Used as the dedup key for subscribe/unsubscribe; must be derived
    /// from the subscriber's own fields, not stored separately.
    fn id(&self) -> String;

    /// Human-readable description for confirmation notices.
    fn describe(&self) -> String {
        self.id()
    }
}
