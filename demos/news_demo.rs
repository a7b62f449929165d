//! # Example: news_demo
//!
//! Runs the full publish/subscribe scenario against a single agency.
//!
//! Shows how to:
//! - Build [`EmailSubscriber`] / [`MobileAppSubscriber`] values with
//!   category and priority filters.
//! - Register them with an [`Agency`] and broadcast news items.
//! - Unsubscribe mid-stream and observe the changed fan-out.
//!
//! ## Flow
//! ```text
//! Agency::new("Global News Network (GNN)")
//!     ├─► subscribe(alice | bob | carol | dave)
//!     ├─► publish(breaking/BREAKING)    → bob only ("general" wildcard)
//!     ├─► publish(sports/NORMAL)        → bob, carol
//!     ├─► unsubscribe(bob)
//!     ├─► publish(technology/URGENT)    → alice, dave
//!     └─► subscriber_count()            → 3
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example news_demo
//! ```

use std::sync::Arc;

use newswire::{Agency, EmailSubscriber, MobileAppSubscriber, Priority, SubscriberRef};

fn banner(label: &str) {
    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("{label}");
    println!("{rule}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let agency = Agency::new("Global News Network (GNN)");

    let alice: SubscriberRef = Arc::new(
        EmailSubscriber::new("Alice Johnson", "alice@example.com")
            .with_categories(["politics", "technology"])
            .with_min_priority(Priority::Normal),
    );
    let bob: SubscriberRef = Arc::new(MobileAppSubscriber::new("user_789", "abc123xyz789"));
    let carol: SubscriberRef = Arc::new(
        EmailSubscriber::new("Carol Davis", "carol@work.com")
            .with_categories(["sports"])
            .with_min_priority(Priority::Normal),
    );
    let dave: SubscriberRef = Arc::new(
        MobileAppSubscriber::new("user_456", "def456uvw123").with_interests(["technology"]),
    );

    agency.subscribe(alice).await;
    agency.subscribe(Arc::clone(&bob)).await;
    agency.subscribe(carol).await;
    agency.subscribe(dave).await;

    banner("BREAKING NEWS");
    agency
        .publish(
            "Major Earthquake Hits Pacific Coast",
            "A 7.8 magnitude earthquake struck at 14:32 local time...",
            "breaking",
            Priority::Breaking,
        )
        .await;

    banner("SPORTS NEWS");
    agency
        .publish(
            "National Team Wins Championship!",
            "Historic victory after 20 years.",
            "sports",
            Priority::Normal,
        )
        .await;

    println!("\nBob unsubscribes...");
    agency.unsubscribe(bob.as_ref()).await;

    banner("TECHNOLOGY NEWS");
    agency
        .publish(
            "Quantum Computing Breakthrough Achieved",
            "Scientists successfully demonstrate stable 100-qubit system.",
            "technology",
            Priority::Urgent,
        )
        .await;

    println!("Active subscribers: {}", agency.subscriber_count().await);
    Ok(())
}
