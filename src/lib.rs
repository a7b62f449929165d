//! # newswire
//!
//! **Newswire** is a small in-process publish/subscribe library for news
//! delivery. A central [`Agency`] accepts subscriber registrations and
//! broadcasts each published item to every registered subscriber,
//! synchronously and in registration order. Subscribers filter items by
//! category interest (and, for the email channel, a minimum priority), and
//! render notifications to stdout.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────────┐   ┌──────────────────────┐
//!     │ EmailSubscriber  │   │ MobileAppSubscriber  │   ... any Subscribe
//!     └────────┬─────────┘   └──────────┬───────────┘
//!              │ subscribe()            │ subscribe()
//!              ▼                        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Agency                                                  │
//! │  - SubscriberRegistry (identity-keyed, insertion order)  │
//! │  - broadcast: snapshot, then sequential update() calls   │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ publish(title, content, category, priority)
//!                            ▼
//!                  News (immutable: id, title, content,
//!                        lowercase category, priority, timestamp)
//! ```
//!
//! ### Delivery model
//! ```text
//! publish(...)
//!   ├─► construct News (category lowercased, id + local time stamped)
//!   ├─► snapshot registry under read lock, release lock
//!   ├─► for each subscriber in registration order:
//!   │       update(&news).await        (panics caught and reported)
//!   └─► return the published News
//! ```
//!
//! There are no delivery guarantees beyond "every subscriber in the
//! snapshot is visited exactly once per publish": no queues, no retries,
//! no persistence. An unsubscribe racing a broadcast may still receive
//! that broadcast, depending on snapshot timing.
//!
//! ## Features
//! | Area            | Description                                                  | Key types / traits                         |
//! |-----------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Subscribers** | Filtered notification channels behind one contract.          | [`Subscribe`], [`SubscriberRef`]           |
//! | **Channels**    | Built-in email and mobile-push renderings.                   | [`EmailSubscriber`], [`MobileAppSubscriber`] |
//! | **Dispatch**    | Registry plus synchronous broadcast.                         | [`Agency`]                                 |
//! | **Items**       | Immutable news values with severity ordering.                | [`News`], [`Priority`]                     |
//! | **Configuration** | Agency name and presentation settings.                     | [`AgencyConfig`]                           |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use newswire::{Agency, EmailSubscriber, MobileAppSubscriber, Priority};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let agency = Agency::new("Global News Network (GNN)");
//!
//!     let alice = Arc::new(
//!         EmailSubscriber::new("Alice Johnson", "alice@example.com")
//!             .with_categories(["politics", "technology"]),
//!     );
//!     let bob = Arc::new(MobileAppSubscriber::new("user_789", "abc123xyz789"));
//!
//!     agency.subscribe(alice).await;
//!     agency.subscribe(bob.clone()).await;
//!
//!     agency
//!         .publish(
//!             "Quantum Computing Breakthrough Achieved",
//!             "Scientists successfully demonstrate stable 100-qubit system.",
//!             "technology",
//!             Priority::Urgent,
//!         )
//!         .await;
//!
//!     agency.unsubscribe(bob.as_ref()).await;
//!     assert_eq!(agency.subscriber_count().await, 1);
//! }
//! ```

mod agency;
mod config;
mod error;
mod news;
mod subscribers;

// ---- Public re-exports ----

pub use agency::Agency;
pub use config::AgencyConfig;
pub use error::ParsePriorityError;
pub use news::{News, Priority};
pub use subscribers::{EmailSubscriber, MobileAppSubscriber, Subscribe, SubscriberRef};
