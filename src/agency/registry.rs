//! # Subscriber registry.
//!
//! Insertion-ordered set of subscribers keyed by their derived identity.
//!
//! ## Rules
//! - At most one entry per identity; insert-if-absent happens entirely
//!   under the write lock, so concurrent subscribers cannot race the check.
//! - Registration order is preserved and drives broadcast order.
//! - Broadcast never iterates the live collection: it takes a
//!   [`snapshot`](SubscriberRegistry::snapshot) under the read lock and
//!   iterates that, so a concurrent unsubscribe cannot corrupt iteration.

use tokio::sync::RwLock;

use crate::subscribers::SubscriberRef;

/// Identity-keyed, insertion-ordered subscriber set.
pub(crate) struct SubscriberRegistry {
    entries: RwLock<Vec<SubscriberRef>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Inserts the subscriber if no entry shares its identity.
    ///
    /// Returns true on insert, false when the identity was already present.
    pub async fn insert(&self, subscriber: SubscriberRef) -> bool {
        let id = subscriber.id();
        let mut entries = self.entries.write().await;
        if entries.iter().any(|s| s.id() == id) {
            return false;
        }
        entries.push(subscriber);
        true
    }

    /// Removes the entry with the given identity, if present.
    ///
    /// Returns true when an entry was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|s| s.id() == id) {
            Some(idx) => {
                entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Stable snapshot of the current entries, in registration order.
    pub async fn snapshot(&self) -> Vec<SubscriberRef> {
        self.entries.read().await.clone()
    }

    /// Current registry size.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::News;
    use crate::subscribers::Subscribe;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Stub(&'static str);

    #[async_trait]
    impl Subscribe for Stub {
        async fn update(&self, _news: &News) {}
        fn id(&self) -> String {
            self.0.to_string()
        }
    }

    #[tokio::test]
    async fn test_insert_is_idempotent_per_identity() {
        let reg = SubscriberRegistry::new();
        assert!(reg.insert(Arc::new(Stub("a"))).await);
        assert!(!reg.insert(Arc::new(Stub("a"))).await);
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let reg = SubscriberRegistry::new();
        reg.insert(Arc::new(Stub("a"))).await;
        assert!(!reg.remove("missing").await);
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_present() {
        let reg = SubscriberRegistry::new();
        reg.insert(Arc::new(Stub("a"))).await;
        reg.insert(Arc::new(Stub("b"))).await;
        assert!(reg.remove("a").await);
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_preserves_registration_order() {
        let reg = SubscriberRegistry::new();
        for id in ["c", "a", "b"] {
            reg.insert(Arc::new(Stub(id))).await;
        }
        let ids: Vec<String> = reg.snapshot().await.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_live_set() {
        let reg = SubscriberRegistry::new();
        reg.insert(Arc::new(Stub("a"))).await;
        let snap = reg.snapshot().await;
        reg.remove("a").await;
        assert_eq!(snap.len(), 1);
        assert_eq!(reg.len().await, 0);
    }
}
