//! # News agency - registry plus broadcast dispatcher.
//!
//! [`Agency`] owns the subscriber registry and fans each published item out
//! to every registered subscriber.
//!
//! ## Architecture
//! ```text
//! subscribe(sub) ──► registry.insert (write lock) ──► [SUBSCRIBED] notice
//! unsubscribe(s) ──► registry.remove (write lock) ──► [UNSUBSCRIBED] notice
//!
//! publish(title, content, category, priority)
//!     ├─► News::new(...)
//!     ├─► header + separator
//!     ├─► registry.snapshot (read lock, then released)
//!     ├─► for sub in snapshot: sub.update(&news).await   (sequential)
//!     │         └─ panic → caught, [PANICKED] notice, next sub still runs
//!     └─► separator
//! ```
//!
//! ## Rules
//! - Broadcast is synchronous: `publish` resolves only after every
//!   snapshotted subscriber's `update` has completed.
//! - The snapshot is taken under the registry lock but dispatch runs after
//!   it is released, so an unsubscribe racing a broadcast may still be
//!   delivered to. There is no delivery guarantee, so this is accepted.
//! - Delivery follows registration order.

use futures::FutureExt;

use crate::agency::registry::SubscriberRegistry;
use crate::config::AgencyConfig;
use crate::news::{News, Priority};
use crate::subscribers::{Subscribe, SubscriberRef};

/// Central publish/subscribe dispatcher for news items.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use newswire::{Agency, EmailSubscriber, Priority};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let agency = Agency::new("GNN");
/// agency.subscribe(Arc::new(EmailSubscriber::new("Alice", "alice@example.com"))).await;
///
/// agency.publish("Title", "Body", "general", Priority::Normal).await;
/// assert_eq!(agency.subscriber_count().await, 1);
/// # }
/// ```
pub struct Agency {
    config: AgencyConfig,
    registry: SubscriberRegistry,
}

impl Agency {
    /// Creates an agency with the given name and default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(AgencyConfig {
            name: name.into(),
            ..AgencyConfig::default()
        })
    }

    /// Creates an agency from an explicit configuration.
    pub fn with_config(config: AgencyConfig) -> Self {
        Self {
            config,
            registry: SubscriberRegistry::new(),
        }
    }

    /// Agency name, as printed in confirmations and publish headers.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Registers a subscriber.
    ///
    /// Prints a confirmation notice on insert; a subscriber whose identity
    /// is already registered is a silent no-op.
    pub async fn subscribe(&self, subscriber: SubscriberRef) {
        let describe = subscriber.describe();
        if self.registry.insert(subscriber).await {
            println!("[SUBSCRIBED] {} to {}", describe, self.config.name);
        }
    }

    /// Removes a subscriber by its derived identity.
    ///
    /// Prints a confirmation notice on removal; an unknown identity is a
    /// silent no-op.
    pub async fn unsubscribe(&self, subscriber: &dyn Subscribe) {
        if self.registry.remove(&subscriber.id()).await {
            println!(
                "[UNSUBSCRIBED] {} left {}\n",
                subscriber.describe(),
                self.config.name
            );
        }
    }

    /// Constructs a news item and broadcasts it to every registered
    /// subscriber, returning the published item.
    pub async fn publish(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        priority: Priority,
    ) -> News {
        let news = News::new(title, content, category, priority);
        self.broadcast(&news).await;
        news
    }

    /// Convenience publish defaulting to the `"general"` category at
    /// [`Priority::Normal`].
    pub async fn publish_general(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> News {
        self.publish(title, content, "general", Priority::Normal).await
    }

    /// Current registry size.
    pub async fn subscriber_count(&self) -> usize {
        self.registry.len().await
    }

    /// Delivers one item to a snapshot of the registry, in registration
    /// order. A panicking subscriber is reported and skipped; the rest of
    /// the snapshot is still visited.
    async fn broadcast(&self, news: &News) {
        let rule = "-".repeat(self.config.rule_width);
        println!("\n{} PUBLISHING {}", self.config.name, news);
        println!("{rule}");

        for subscriber in self.registry.snapshot().await {
            let fut = subscriber.update(news);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                let info = {
                    let any = &*panic_err;
                    if let Some(msg) = any.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = any.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    }
                };
                println!("[PANICKED] {}: {info}", subscriber.describe());
            }
        }

        println!("{rule}");
    }
}
