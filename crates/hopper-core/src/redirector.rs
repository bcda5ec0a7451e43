use crate::shortcode::ShortCode;
use crate::store::LinkRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::RedirectorError>;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored link record.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}
