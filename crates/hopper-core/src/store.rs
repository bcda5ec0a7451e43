use crate::error::StoreError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result type for link store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A stored link, keyed by its [`ShortCode`].
///
/// Records are immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the link was created.
    pub created_at: Timestamp,
}

impl LinkRecord {
    /// Creates a record for `original_url` stamped with the current time.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Outcome of a conditional insert.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The code was free and the record is now stored.
    Inserted,
    /// The code is already taken; nothing was written.
    Conflict,
}

/// A read-only view of a link store.
///
/// This trait provides only the read operation from [`LinkStore`],
/// allowing services like the redirector to have read-only access.
#[async_trait]
pub trait ReadLinkStore: Send + Sync + 'static {
    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}

#[async_trait]
pub trait LinkStore: ReadLinkStore {
    /// Stores `record` under `code` only if `code` is not present yet.
    ///
    /// The check and the write must be atomic with respect to concurrent
    /// callers: of two inserts racing on the same code exactly one observes
    /// [`InsertOutcome::Inserted`]. An existing record is never overwritten.
    async fn insert_if_absent(&self, code: &ShortCode, record: LinkRecord)
        -> Result<InsertOutcome>;
}

#[async_trait]
impl<S: ReadLinkStore + ?Sized> ReadLinkStore for Arc<S> {
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        (**self).get(code).await
    }
}

#[async_trait]
impl<S: LinkStore + ?Sized> LinkStore for Arc<S> {
    async fn insert_if_absent(
        &self,
        code: &ShortCode,
        record: LinkRecord,
    ) -> Result<InsertOutcome> {
        (**self).insert_if_absent(code, record).await
    }
}
