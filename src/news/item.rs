//! # Immutable news items.
//!
//! A [`News`] value is stamped at construction with a unique identifier and
//! the current local time, and is never mutated afterwards. The category is
//! normalized to lowercase so subscriber interest matching is
//! case-insensitive on the publishing side.
//!
//! ## Example
//! ```
//! use newswire::{News, Priority};
//!
//! let item = News::new("Quake", "7.8 magnitude...", "Breaking", Priority::Breaking);
//! assert_eq!(item.category(), "breaking");
//! assert_eq!(item.priority(), Priority::Breaking);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::{DateTime, Local};

use super::priority::Priority;

/// Global sequence counter for news identifiers.
static NEWS_SEQ: AtomicU64 = AtomicU64::new(0);

/// One published news item.
///
/// Immutable once constructed; all access goes through accessor methods.
/// Cloning is cheap enough for the broadcast path and carries the same
/// identifier, so clones are the same logical item.
#[derive(Debug, Clone)]
pub struct News {
    id: u64,
    title: String,
    content: String,
    category: String,
    priority: Priority,
    published_at: DateTime<Local>,
}

impl News {
    /// Creates a news item, normalizing the category to lowercase and
    /// stamping a fresh identifier and the current local time.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        priority: Priority,
    ) -> Self {
        Self {
            id: NEWS_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            title: title.into(),
            content: content.into(),
            category: category.to_ascii_lowercase(),
            priority,
            published_at: Local::now(),
        }
    }

    /// Unique identifier, monotonically increasing per process.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercase category, regardless of the casing passed at construction.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Local wall-clock time at construction.
    #[inline]
    pub fn published_at(&self) -> DateTime<Local> {
        self.published_at
    }
}

impl fmt::Display for News {
    /// Summary line: `[PRIORITY] title (category) - HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.priority,
            self.title,
            self.category,
            self.published_at.format("%H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normalized_to_lowercase() {
        let item = News::new("t", "c", "Breaking", Priority::Normal);
        assert_eq!(item.category(), "breaking");

        let item = News::new("t", "c", "TECHNOLOGY", Priority::Normal);
        assert_eq!(item.category(), "technology");

        let item = News::new("t", "c", "sports", Priority::Normal);
        assert_eq!(item.category(), "sports");
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = News::new("a", "", "general", Priority::Normal);
        let b = News::new("b", "", "general", Priority::Normal);
        let c = News::new("c", "", "general", Priority::Normal);
        assert!(a.id() < b.id());
        assert!(b.id() < c.id());
    }

    #[test]
    fn test_summary_line_shape() {
        let item = News::new("Title Here", "body", "Sports", Priority::Urgent);
        let line = item.to_string();
        assert!(line.starts_with("[URGENT] Title Here (sports) - "));
    }

    #[test]
    fn test_clone_keeps_identity() {
        let item = News::new("t", "c", "general", Priority::Normal);
        let copy = item.clone();
        assert_eq!(item.id(), copy.id());
        assert_eq!(item.category(), copy.category());
    }
}
