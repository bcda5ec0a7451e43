use std::sync::Arc;

use hopper_core::{LinkStore, Redirector, Shortener};
use hopper_generator::RandomGenerator;
use hopper_redirector::{CacheConfig, CachedLinkStore, RedirectorService};
use hopper_shortener::{ShortenerService, ShortenerSettings};

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            base_url: public_base_url.into().into(),
        }
    }

    /// Wires both services to one store.
    ///
    /// Redirects are served through a read cache unless `cache` is `None`.
    pub fn from_store<S: LinkStore + Clone>(
        store: S,
        settings: ShortenerSettings,
        cache: Option<CacheConfig>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let shortener = Arc::new(ShortenerService::with_settings(
            store.clone(),
            RandomGenerator::new(),
            settings,
        ));

        let redirector: Arc<dyn Redirector> = match cache {
            Some(config) => Arc::new(RedirectorService::new(CachedLinkStore::with_config(
                store, config,
            ))),
            None => Arc::new(RedirectorService::new(store)),
        };

        Self::new(shortener, redirector, public_base_url)
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
