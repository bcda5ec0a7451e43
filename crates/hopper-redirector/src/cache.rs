use async_trait::async_trait;
use hopper_core::store::Result;
use hopper_core::{LinkRecord, ReadLinkStore, ShortCode, StoreError};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Default number of cached links.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Configuration for a [`CachedLinkStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    #[builder(default = DEFAULT_CACHE_CAPACITY)]
    pub max_capacity: u64,
    /// Evict entries that have not been read for this long.
    #[builder(default, setter(strip_option))]
    pub time_to_idle: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Why a single-flight fetch produced no value to cache.
#[derive(Debug)]
enum Miss {
    NotFound,
    Store(StoreError),
}

/// A read-only store decorator that keeps found links in memory.
///
/// Links never change once created, so a cached record can't go stale.
/// Lookups that find nothing are not cached: a code that is inserted later
/// is visible on the very next read. Concurrent misses for the same code
/// are coalesced into a single read of the inner store.
#[derive(Debug, Clone)]
pub struct CachedLinkStore<R> {
    inner: R,
    cache: Cache<ShortCode, LinkRecord>,
}

impl<R: ReadLinkStore> CachedLinkStore<R> {
    /// Wraps `inner` with a cache using the default configuration.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, CacheConfig::default())
    }

    pub fn with_config(inner: R, config: CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.max_capacity);
        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            inner,
            cache: builder.build(),
        }
    }

    /// Returns a reference to the inner store.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Whether `code` is currently held in the cache.
    pub fn is_cached(&self, code: &ShortCode) -> bool {
        self.cache.contains_key(code)
    }
}

#[async_trait]
impl<R: ReadLinkStore> ReadLinkStore for CachedLinkStore<R> {
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        trace!(code = %code, "fetching link with cache");

        let fetched = self
            .cache
            .try_get_with(code.clone(), async {
                trace!(code = %code, "cache miss, reading inner store");
                match self.inner.get(code).await {
                    Ok(Some(record)) => Ok(record),
                    Ok(None) => Err(Miss::NotFound),
                    Err(e) => Err(Miss::Store(e)),
                }
            })
            .await;

        match fetched {
            Ok(record) => Ok(Some(record)),
            Err(miss) => match miss.as_ref() {
                Miss::NotFound => {
                    debug!(code = %code, "short code not found");
                    Ok(None)
                }
                Miss::Store(e) => Err(e.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopper_core::{InsertOutcome, LinkStore};
    use hopper_storage::InMemoryLinkStore;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Counts reads that reach the wrapped store.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryLinkStore,
        reads: AtomicU32,
    }

    #[async_trait]
    impl ReadLinkStore for CountingStore {
        async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(code).await
        }
    }

    struct DownStore;

    #[async_trait]
    impl ReadLinkStore for DownStore {
        async fn get(&self, _code: &ShortCode) -> Result<Option<LinkRecord>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    async fn seed(store: &InMemoryLinkStore, c: &ShortCode, url: &str) {
        let outcome = store
            .insert_if_absent(c, LinkRecord::new(url))
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);
    }

    #[tokio::test]
    async fn found_records_are_served_from_cache() {
        let cached = CachedLinkStore::new(CountingStore::default());
        let c = code("abc123");
        seed(&cached.inner().inner, &c, "https://example.com").await;

        let first = cached.get(&c).await.unwrap().unwrap();
        let second = cached.get(&c).await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.original_url, "https://example.com");
        assert!(cached.is_cached(&c));
        assert_eq!(cached.inner().reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn misses_are_not_cached() {
        let cached = CachedLinkStore::new(CountingStore::default());
        let c = code("late00");

        assert!(cached.get(&c).await.unwrap().is_none());
        assert!(!cached.is_cached(&c));

        seed(&cached.inner().inner, &c, "https://late.example").await;

        let record = cached.get(&c).await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://late.example");
        assert_eq!(cached.inner().reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn store_errors_pass_through_and_are_not_cached() {
        let cached = CachedLinkStore::new(DownStore);
        let c = code("abc123");

        let err = cached.get(&c).await.unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(!cached.is_cached(&c));
    }

    #[tokio::test]
    async fn concurrent_misses_coalesce_into_one_read() {
        let cached = Arc::new(CachedLinkStore::new(CountingStore::default()));
        let c = code("hot000");
        seed(&cached.inner().inner, &c, "https://hot.example").await;

        let mut handles = vec![];
        for _ in 0..16 {
            let cached = Arc::clone(&cached);
            let c = c.clone();
            handles.push(tokio::spawn(async move { cached.get(&c).await.unwrap() }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        assert_eq!(cached.inner().reads.load(Ordering::SeqCst), 1);
    }
}
