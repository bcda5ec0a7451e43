use crate::validate::validate_url;
use async_trait::async_trait;
use hopper_core::{InsertOutcome, LinkRecord, LinkStore, ShortCode, Shortener, ShortenerError};
use hopper_generator::CodeGenerator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Number of candidates drawn before giving up with `CapacityExhausted`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Retry budget for code collisions. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `LinkStore` and a `CodeGenerator`. Generated codes
/// may collide; uniqueness comes from the store's conditional insert, and a
/// collision simply costs one attempt from the retry budget. The service
/// holds no mutable state of its own and never overwrites a stored link.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<S: LinkStore, G: CodeGenerator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_settings(store, generator, ShortenerSettings::default())
    }

    pub fn with_settings(store: S, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            max_attempts: settings.max_attempts.max(1),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[async_trait]
impl<S: LinkStore, G: CodeGenerator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        validate_url(original_url)?;

        let record = LinkRecord::new(original_url);

        for attempt in 1..=self.max_attempts {
            let code = self.generator.next_candidate();
            trace!(code = %code, attempt, "trying candidate short code");

            match self.store.insert_if_absent(&code, record.clone()).await? {
                InsertOutcome::Inserted => {
                    debug!(code = %code, url = %original_url, attempt, "created short link");
                    return Ok(code);
                }
                InsertOutcome::Conflict => {
                    debug!(code = %code, attempt, "short code collision");
                }
            }
        }

        warn!(
            attempts = self.max_attempts,
            "every candidate short code was already taken"
        );
        Err(ShortenerError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }
}
