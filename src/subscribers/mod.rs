//! # Notification channels for published news.
//!
//! This module provides the [`Subscribe`] trait and the built-in channel
//! implementations.
//!
//! ## Architecture
//! ```text
//! Agency::publish(title, content, category, priority)
//!     │
//!     ├─► News::new(...)            (category lowercased, id + time stamped)
//!     └─► for each registered sub:  Subscribe::update(&News)
//!               │
//!          ┌────┴─────────┐
//!          ▼              ▼
//!    EmailSubscriber   MobileAppSubscriber
//!    (category + min   (category only)
//!     priority filter)
//! ```
//!
//! ## Implementing custom subscribers
//! ```
//! use newswire::{News, Subscribe};
//! use async_trait::async_trait;
//!
//! struct Webhook {
//!     url: String,
//! }
//!
//! #[async_trait]
//! impl Subscribe for Webhook {
//!     async fn update(&self, news: &News) {
//!         // POST the item to self.url...
//!     }
//!     fn id(&self) -> String {
//!         format!("webhook:{}", self.url)
//!     }
//! }
//! ```

mod email;
mod mobile;
mod subscribe;

pub use email::EmailSubscriber;
pub use mobile::MobileAppSubscriber;
pub use subscribe::{Subscribe, SubscriberRef};
