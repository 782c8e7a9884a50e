//! Tracks freshness of remotely loaded data
//!
//! Views read cached values; invalidating a key schedules a refetch on the
//! next tick, mirroring how the web client's query cache behaves.

use std::collections::BTreeMap;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Loaded and not invalidated since
    Fresh,
    /// Needs to be fetched again
    Stale,
    /// A fetch is in flight
    Fetching,
    /// Invalidated while a fetch was in flight; refetched once it settles
    FetchingStale,
    /// Last fetch failed; waits for an explicit invalidation
    Failed,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    queries: BTreeMap<String, QueryStatus>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, key: &str) -> Option<QueryStatus> {
        self.queries.get(key).copied()
    }

    /// Mark a key stale so the next tick refetches it
    ///
    /// A key already being fetched stays in flight, and is refetched after
    /// that fetch settles since its answer may predate the invalidation.
    pub fn invalidate(&mut self, key: &str) {
        let status = self
            .queries
            .entry(key.to_string())
            .or_insert(QueryStatus::Stale);
        *status = match *status {
            QueryStatus::Fetching | QueryStatus::FetchingStale => QueryStatus::FetchingStale,
            _ => QueryStatus::Stale,
        };
        debug!(key, status = ?*status, "query invalidated");
    }

    /// Keys that need fetching; they are moved to `Fetching`
    pub fn take_stale(&mut self) -> Vec<String> {
        let mut keys = Vec::new();
        for (key, status) in self.queries.iter_mut() {
            if *status == QueryStatus::Stale {
                *status = QueryStatus::Fetching;
                keys.push(key.clone());
            }
        }
        keys
    }

    pub fn mark_fresh(&mut self, key: &str) {
        self.settle(key, QueryStatus::Fresh);
    }

    pub fn mark_failed(&mut self, key: &str) {
        self.settle(key, QueryStatus::Failed);
    }

    fn settle(&mut self, key: &str, outcome: QueryStatus) {
        let status = self
            .queries
            .entry(key.to_string())
            .or_insert(QueryStatus::Fetching);
        *status = if *status == QueryStatus::FetchingStale {
            debug!(key, "invalidated during fetch; refetching");
            QueryStatus::Stale
        } else {
            outcome
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_then_take() {
        let mut cache = QueryCache::new();
        cache.mark_fresh("/api/user");
        cache.invalidate("/api/user");

        assert_eq!(cache.take_stale(), vec!["/api/user".to_string()]);
        assert_eq!(cache.status("/api/user"), Some(QueryStatus::Fetching));
        assert!(cache.take_stale().is_empty());
    }

    #[test]
    fn test_invalidate_while_fetching_refetches_after_settle() {
        let mut cache = QueryCache::new();
        cache.invalidate("/api/user");
        cache.take_stale();
        cache.invalidate("/api/user");

        // Still in flight: no duplicate fetch
        assert_eq!(cache.status("/api/user"), Some(QueryStatus::FetchingStale));
        assert!(cache.take_stale().is_empty());

        cache.mark_fresh("/api/user");
        assert_eq!(cache.status("/api/user"), Some(QueryStatus::Stale));
        assert_eq!(cache.take_stale(), vec!["/api/user".to_string()]);

        cache.mark_fresh("/api/user");
        assert_eq!(cache.status("/api/user"), Some(QueryStatus::Fresh));
    }

    #[test]
    fn test_failed_fetch_after_invalidation_still_refetches() {
        let mut cache = QueryCache::new();
        cache.invalidate("/api/user");
        cache.take_stale();
        cache.invalidate("/api/user");
        cache.mark_failed("/api/user");
        assert_eq!(cache.take_stale().len(), 1);
    }

    #[test]
    fn test_failed_waits_for_invalidation() {
        let mut cache = QueryCache::new();
        cache.mark_failed("/api/user");
        assert!(cache.take_stale().is_empty());
        cache.invalidate("/api/user");
        assert_eq!(cache.take_stale().len(), 1);
    }
}
