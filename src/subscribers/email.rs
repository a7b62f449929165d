//! # Email notification channel.
//!
//! [`EmailSubscriber`] filters by interested categories **and** a minimum
//! priority threshold, then renders an email-shaped notification to stdout.
//!
//! ## Filter
//! An item is accepted iff:
//! - the category set contains `"general"` (wildcard) or the item's
//!   category, **and**
//! - the item's priority is at least as severe as the configured minimum
//!   (BREAKING > URGENT > NORMAL).
//!
//! ## Output format
//! ```text
//! EMAIL To: Alice Johnson <alice@example.com>
//!       Subject: BREAKING: Major Earthquake Hits Pacific Coast
//!       [BREAKING] Major Earthquake Hits Pacific Coast (breaking) - 14:32:05
//! ```

use std::collections::HashSet;

use async_trait::async_trait;

use crate::news::{News, Priority};
use crate::subscribers::Subscribe;

/// The wildcard interest matching any published category.
pub(crate) const WILDCARD_CATEGORY: &str = "general";

/// Email-channel subscriber with category and priority filtering.
pub struct EmailSubscriber {
    name: String,
    email: String,
    categories: HashSet<String>,
    min_priority: Priority,
}

impl EmailSubscriber {
    /// Creates a subscriber interested in everything (`{"general"}`) at
    /// minimum priority [`Priority::Normal`].
    ///
    /// Narrow the filter with [`with_categories`](Self::with_categories)
    /// and [`with_min_priority`](Self::with_min_priority).
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            categories: HashSet::from([WILDCARD_CATEGORY.to_string()]),
            min_priority: Priority::Normal,
        }
    }

    /// Replaces the interested-category set.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the minimum priority threshold.
    #[must_use]
    pub fn with_min_priority(mut self, min: Priority) -> Self {
        self.min_priority = min;
        self
    }

    /// Returns true if this subscriber's filter accepts the item.
    pub fn accepts(&self, news: &News) -> bool {
        let interested = self.categories.contains(WILDCARD_CATEGORY)
            || self.categories.contains(news.category());
        interested && news.priority().is_at_least(self.min_priority)
    }
}

#[async_trait]
impl Subscribe for EmailSubscriber {
    async fn update(&self, news: &News) {
        if self.accepts(news) {
            println!("EMAIL To: {} <{}>", self.name, self.email);
            println!("      Subject: {}: {}", news.priority(), news.title());
            println!("      {news}\n");
        }
    }

    fn id(&self) -> String {
        format!("email:{}", self.email)
    }

    fn describe(&self) -> String {
        format!("EmailSubscriber[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, priority: Priority) -> News {
        News::new("title", "content", category, priority)
    }

    #[test]
    fn test_defaults_are_general_and_normal() {
        let sub = EmailSubscriber::new("A", "a@example.com");
        assert!(sub.accepts(&item("sports", Priority::Normal)));
        assert!(sub.accepts(&item("technology", Priority::Breaking)));
    }

    #[test]
    fn test_category_filter() {
        let sub = EmailSubscriber::new("C", "c@work.com").with_categories(["sports"]);
        assert!(!sub.accepts(&item("technology", Priority::Urgent)));
        assert!(sub.accepts(&item("sports", Priority::Normal)));
    }

    #[test]
    fn test_breaking_passes_normal_threshold() {
        let sub = EmailSubscriber::new("A", "a@example.com")
            .with_categories(["politics", "technology"])
            .with_min_priority(Priority::Normal);
        assert!(sub.accepts(&item("technology", Priority::Breaking)));
    }

    #[test]
    fn test_priority_threshold_rejects_less_severe() {
        let sub = EmailSubscriber::new("A", "a@example.com")
            .with_categories(["technology"])
            .with_min_priority(Priority::Urgent);
        assert!(!sub.accepts(&item("technology", Priority::Normal)));
        assert!(sub.accepts(&item("technology", Priority::Urgent)));
        assert!(sub.accepts(&item("technology", Priority::Breaking)));
    }

    #[test]
    fn test_wildcard_matches_any_category() {
        let sub = EmailSubscriber::new("A", "a@example.com")
            .with_categories(["general", "sports"]);
        assert!(sub.accepts(&item("weather", Priority::Normal)));
    }

    #[test]
    fn test_identity_derived_from_address() {
        let sub = EmailSubscriber::new("Alice Johnson", "alice@example.com");
        assert_eq!(sub.id(), "email:alice@example.com");
        assert_eq!(sub.describe(), "EmailSubscriber[Alice Johnson]");
    }
}
