//! # Mobile push notification channel.
//!
//! [`MobileAppSubscriber`] filters by interested categories only — every
//! priority is pushed. The rendered notification shows a truncated
//! device-token preview (first 8 characters) rather than the full token.
//!
//! ## Output format
//! ```text
//! PUSH User user_789 (Device: abc123xy...)
//!      [NORMAL] National Team Wins Championship! (sports) - 14:35:12
//! ```

use std::collections::HashSet;

use async_trait::async_trait;

use crate::news::News;
use crate::subscribers::email::WILDCARD_CATEGORY;
use crate::subscribers::Subscribe;

/// Push-channel subscriber with category-only filtering.
pub struct MobileAppSubscriber {
    user_id: String,
    device_token: String,
    interests: HashSet<String>,
}

impl MobileAppSubscriber {
    /// Creates a subscriber interested in everything (`{"general"}`).
    pub fn new(user_id: impl Into<String>, device_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            device_token: device_token.into(),
            interests: HashSet::from([WILDCARD_CATEGORY.to_string()]),
        }
    }

    /// Replaces the interest set.
    ///
    /// An empty set falls back to `{"general"}` so the subscriber never
    /// silently filters out everything.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interests: HashSet<String> = interests.into_iter().map(Into::into).collect();
        self.interests = if interests.is_empty() {
            HashSet::from([WILDCARD_CATEGORY.to_string()])
        } else {
            interests
        };
        self
    }

    /// Returns true if this subscriber's interests accept the item.
    pub fn accepts(&self, news: &News) -> bool {
        self.interests.contains(WILDCARD_CATEGORY) || self.interests.contains(news.category())
    }

    /// First 8 characters of the device token, or the whole token when
    /// shorter. Char-based, so multi-byte tokens never split mid-character.
    fn token_preview(&self) -> &str {
        match self.device_token.char_indices().nth(8) {
            Some((idx, _)) => &self.device_token[..idx],
            None => &self.device_token,
        }
    }
}

#[async_trait]
impl Subscribe for MobileAppSubscriber {
    async fn update(&self, news: &News) {
        if self.accepts(news) {
            println!(
                "PUSH User {} (Device: {}...)",
                self.user_id,
                self.token_preview()
            );
            println!("     {news}\n");
        }
    }

    fn id(&self) -> String {
        format!("mobile:{}", self.user_id)
    }

    fn describe(&self) -> String {
        format!("MobileAppSubscriber[{}]", self.user_id)
    }
}
