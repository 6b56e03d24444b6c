use std::sync::Arc;

use snip_core::{CodeFormat, LinkStore, Resolver, Shortener, StorageError};
use snip_generator::Generator;
use snip_redirector::ResolverService;
use snip_shortener::{ShortenerService, ShortenerSettings};
use snip_storage::InMemoryLinkStore;

/// Object-safe view of a store's size, for the health endpoint.
pub trait LinkCount: Send + Sync + 'static {
    fn link_count(&self) -> Result<usize, StorageError>;
}

impl<S: LinkStore> LinkCount for S {
    fn link_count(&self) -> Result<usize, StorageError> {
        self.len()
    }
}

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    resolver: Arc<dyn Resolver>,
    links: Arc<dyn LinkCount>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        resolver: Arc<dyn Resolver>,
        links: Arc<dyn LinkCount>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            resolver,
            links,
            base_url: public_base_url.into(),
        }
    }

    /// Wires both services to one fresh in-memory store.
    pub fn in_memory<G: Generator>(
        generator: G,
        format: CodeFormat,
        settings: ShortenerSettings,
        public_base_url: impl Into<String>,
    ) -> Self {
        let store = Arc::new(InMemoryLinkStore::with_format(format));
        let shortener = ShortenerService::with_settings(Arc::clone(&store), generator, settings);
        let resolver = ResolverService::new(Arc::clone(&store));
        Self::new(Arc::new(shortener), Arc::new(resolver), store, public_base_url)
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn links(&self) -> &dyn LinkCount {
        self.links.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
