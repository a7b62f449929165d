//! # Agency configuration.
//!
//! [`AgencyConfig`] controls the presentation side of an
//! [`Agency`](crate::Agency): the name printed in confirmations and
//! broadcast headers, and the width of the separator rule drawn around a
//! broadcast.
//!
//! # Example
//! ```
//! use newswire::AgencyConfig;
//!
//! let mut cfg = AgencyConfig::default();
//! cfg.name = "Global News Network (GNN)".to_string();
//! cfg.rule_width = 70;
//!
//! assert_eq!(cfg.rule_width, 70);
//! ```

/// Configuration for a news agency.
#[derive(Clone, Debug)]
pub struct AgencyConfig {
    /// Agency name shown in confirmations and publish headers.
    pub name: String,
    /// Width of the `-` separator rule printed around a broadcast.
    pub rule_width: usize,
}

impl Default for AgencyConfig {
    /// Provides a default configuration:
    /// - `name = "newswire"`
    /// - `rule_width = 70`
    fn default() -> Self {
        Self {
            name: "newswire".to_string(),
            rule_width: 70,
        }
    }
}
