//! # Priority levels for published news.
//!
//! [`Priority`] is a closed enumeration ordered by severity:
//! `Breaking` > `Urgent` > `Normal`. The severity rank is encoded so that
//! 0 is the most severe; "at least as severe as threshold T" means the
//! item's rank is numerically `<=` T's rank.
//!
//! ## Example
//! ```
//! use newswire::Priority;
//!
//! assert!(Priority::Breaking.is_at_least(Priority::Normal));
//! assert!(!Priority::Normal.is_at_least(Priority::Urgent));
//! assert_eq!("URGENT".parse::<Priority>().unwrap(), Priority::Urgent);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePriorityError;

/// Severity of a news item, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Highest severity; delivered past any email threshold.
    Breaking,
    /// Elevated severity.
    Urgent,
    /// Baseline severity; the default for convenience publishing.
    Normal,
}

impl Priority {
    /// Severity rank: 0 is the most severe.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Priority::Breaking => 0,
            Priority::Urgent => 1,
            Priority::Normal => 2,
        }
    }

    /// Returns true if `self` is at least as severe as `min`.
    #[inline]
    pub fn is_at_least(self, min: Priority) -> bool {
        self.rank() <= min.rank()
    }

    /// Uppercase wire form, as rendered in notifications.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Breaking => "BREAKING",
            Priority::Urgent => "URGENT",
            Priority::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// Parses a priority name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breaking" => Ok(Priority::Breaking),
            "urgent" => Ok(Priority::Urgent),
            "normal" => Ok(Priority::Normal),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ranks() {
        assert_eq!(Priority::Breaking.rank(), 0);
        assert_eq!(Priority::Urgent.rank(), 1);
        assert_eq!(Priority::Normal.rank(), 2);
    }

    #[test]
    fn test_is_at_least() {
        assert!(Priority::Breaking.is_at_least(Priority::Normal));
        assert!(Priority::Breaking.is_at_least(Priority::Urgent));
        assert!(Priority::Breaking.is_at_least(Priority::Breaking));
        assert!(Priority::Urgent.is_at_least(Priority::Normal));
        assert!(!Priority::Urgent.is_at_least(Priority::Breaking));
        assert!(Priority::Normal.is_at_least(Priority::Normal));
        assert!(!Priority::Normal.is_at_least(Priority::Urgent));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("breaking".parse::<Priority>().unwrap(), Priority::Breaking);
        assert_eq!("BREAKING".parse::<Priority>().unwrap(), Priority::Breaking);
        assert_eq!(" Urgent ".parse::<Priority>().unwrap(), Priority::Urgent);
        assert_eq!("normal".parse::<Priority>().unwrap(), Priority::Normal);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "critical".parse::<Priority>().unwrap_err();
        assert_eq!(err.0, "critical");
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Priority::Breaking.to_string(), "BREAKING");
        assert_eq!(Priority::Normal.to_string(), "NORMAL");
    }
}
