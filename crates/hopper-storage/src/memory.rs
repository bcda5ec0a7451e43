use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use hopper_core::store::Result;
use hopper_core::{InsertOutcome, LinkRecord, LinkStore, ReadLinkStore, ShortCode};
use tracing::trace;

/// In-memory implementation of the link store using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. The conditional insert goes through the entry
/// API, which holds the shard lock between the presence check and the write.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    storage: DashMap<ShortCode, LinkRecord>,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory link store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadLinkStore for InMemoryLinkStore {
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn insert_if_absent(
        &self,
        code: &ShortCode,
        record: LinkRecord,
    ) -> Result<InsertOutcome> {
        match self.storage.entry(code.clone()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "code already taken");
                Ok(InsertOutcome::Conflict)
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(InsertOutcome::Inserted)
            }
        }
    }
}
