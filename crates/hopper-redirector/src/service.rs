use std::sync::Arc;

use async_trait::async_trait;
use hopper_core::{LinkRecord, ReadLinkStore, Redirector, RedirectorError, ShortCode};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only store; resolving never writes anything.
#[derive(Debug)]
pub struct RedirectorService<R> {
    store: Arc<R>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: ReadLinkStore> RedirectorService<R> {
    /// Creates a new RedirectorService with the given store.
    pub fn new(store: R) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The stored link
    /// * `Ok(None)` - If the code doesn't exist
    /// * `Err(e)` - If the store could not be read
    pub async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>, RedirectorError> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: ReadLinkStore> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>, RedirectorError> {
        trace!(code = %code, "resolving short code");

        match self.store.get(code).await? {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "resolved short code");
                Ok(Some(record))
            }
            None => {
                trace!(code = %code, "short code not found");
                Ok(None)
            }
        }
    }
}
