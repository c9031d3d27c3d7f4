//! Application state shared across front ends.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::store::{FileStore, Store, StoreError};

/// Application state: config, durable store, clock, and the product catalog.
///
/// Constructed once and passed to whichever layer needs it, so tests can
/// instantiate isolated instances (no global singletons). Cheaply cloneable
/// via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: Box<dyn Store>,
    clock: Box<dyn Clock>,
    catalog: Catalog,
}

impl AppState {
    /// Create state over an explicit store and clock (tests inject
    /// [`crate::store::MemoryStore`] and [`crate::clock::FixedClock`] here).
    #[must_use]
    pub fn new(
        config: Config,
        store: impl Store + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Box::new(store),
                clock: Box::new(clock),
                catalog: Catalog::builtin(),
            }),
        }
    }

    /// Open the file store under `config.data_dir` with the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: Config) -> Result<Self, StoreError> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::new(config, store, SystemClock))
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the durable store.
    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    /// Get a reference to the clock.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
