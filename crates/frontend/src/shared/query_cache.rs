//! Keyed cache for async API requests
//!
//! `QueryStore` holds the plain per-key state machine, `QueryCache` puts it in
//! a signal so views re-render when a request settles. Concurrent requests for
//! the same key share one fetch.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of one cached request
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<V> {
    Loading,
    Failed(String),
    Ready(V),
}

impl<V> QueryState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&V> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryStore<K, V> {
    entries: HashMap<K, QueryState<V>>,
}

impl<K, V> Default for QueryStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> QueryStore<K, V> {
    /// Marks `key` as loading and returns `true` if the caller has to fetch it.
    ///
    /// Loading and ready entries are left alone; failed entries are retried.
    pub fn begin(&mut self, key: K) -> bool {
        match self.entries.get(&key) {
            Some(QueryState::Loading) | Some(QueryState::Ready(_)) => false,
            Some(QueryState::Failed(_)) | None => {
                self.entries.insert(key, QueryState::Loading);
                true
            }
        }
    }

    pub fn settle(&mut self, key: K, result: Result<V, String>) {
        let state = match result {
            Ok(value) => QueryState::Ready(value),
            Err(message) => QueryState::Failed(message),
        };
        self.entries.insert(key, state);
    }

    pub fn get(&self, key: &K) -> Option<&QueryState<V>> {
        self.entries.get(key)
    }

    /// Drops the entry so the next `begin` fetches again
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }
}

/// Reactive wrapper around [`QueryStore`]
pub struct QueryCache<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    store: RwSignal<QueryStore<K, V>>,
}

impl<K, V> Clone for QueryCache<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for QueryCache<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(QueryStore::default()),
        }
    }

    /// Starts `fetcher` for `key` unless the key is already loading or cached
    pub fn fetch<F, Fut>(&self, key: K, fetcher: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<V, String>> + 'static,
    {
        let should_fetch = self
            .store
            .try_update(|store| store.begin(key.clone()))
            .unwrap_or(false);
        if !should_fetch {
            return;
        }

        let store = self.store;
        spawn_local(async move {
            let result = fetcher().await;
            if let Err(err) = &result {
                log::warn!("Query failed: {}", err);
            }
            store.update(|s| s.settle(key, result));
        });
    }

    /// Current state of `key`; unknown keys read as loading
    pub fn state(&self, key: &K) -> QueryState<V> {
        self.store
            .with(|store| store.get(key).cloned())
            .unwrap_or(QueryState::Loading)
    }

    pub fn invalidate(&self, key: &K) {
        self.store.update(|store| store.invalidate(key));
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_fetches_and_marks_loading() {
        let mut store: QueryStore<String, u32> = QueryStore::default();
        assert!(store.begin("t-1".into()));
        assert_eq!(store.get(&"t-1".into()), Some(&QueryState::Loading));
    }

    #[test]
    fn test_concurrent_requests_are_deduplicated() {
        let mut store: QueryStore<String, u32> = QueryStore::default();
        assert!(store.begin("t-1".into()));
        assert!(!store.begin("t-1".into()));
        // other keys are independent
        assert!(store.begin("t-2".into()));
    }

    #[test]
    fn test_ready_entries_are_served_from_cache() {
        let mut store: QueryStore<String, u32> = QueryStore::default();
        store.begin("t-1".into());
        store.settle("t-1".into(), Ok(7));

        assert!(!store.begin("t-1".into()));
        assert_eq!(store.get(&"t-1".into()), Some(&QueryState::Ready(7)));
    }

    #[test]
    fn test_failed_entries_are_retried() {
        let mut store: QueryStore<(), u32> = QueryStore::default();
        store.begin(());
        store.settle((), Err("Failed to fetch teams".into()));
        assert_eq!(
            store.get(&()).and_then(|s| s.error()),
            Some("Failed to fetch teams")
        );

        assert!(store.begin(()));
        assert!(store.get(&()).unwrap().is_loading());
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut store: QueryStore<String, u32> = QueryStore::default();
        store.begin("t-1".into());
        store.settle("t-1".into(), Ok(1));
        store.invalidate(&"t-1".into());

        assert_eq!(store.get(&"t-1".into()), None);
        assert!(store.begin("t-1".into()));
    }

    #[test]
    fn test_retry_after_failure_replaces_error_with_data() {
        let mut store: QueryStore<String, u32> = QueryStore::default();
        store.begin("t-1".into());
        store.settle("t-1".into(), Err("Failed to fetch revenues".into()));

        // retry: drop the failed entry, then fetch again
        store.invalidate(&"t-1".into());
        assert!(store.begin("t-1".into()));
        assert!(store.get(&"t-1".into()).unwrap().is_loading());
        store.settle("t-1".into(), Ok(3));
        assert_eq!(store.get(&"t-1".into()), Some(&QueryState::Ready(3)));
    }
}
