//! Integration tests for QuickBite.
//!
//! These exercise the full stack (services over repositories over the file
//! store) against a throwaway data directory, the way the CLI uses it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickbite-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tempfile::TempDir;

use quickbite_storefront::clock::FixedClock;
use quickbite_storefront::config::Config;
use quickbite_storefront::store::FileStore;
use quickbite_storefront::AppState;

/// A full application stack over a throwaway data directory.
///
/// The directory lives as long as the context; [`TestContext::reopen`]
/// builds a second state over the same directory to check durability.
pub struct TestContext {
    state: AppState,
    clock: Arc<FixedClock>,
    dir: TempDir,
}

impl TestContext {
    /// Stand up a fresh stack with the clock pinned to a June weekday.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let clock = Arc::new(FixedClock::at(
            "2025-06-15T12:00:00Z".parse().expect("valid timestamp"),
        ));
        let state = Self::open(&dir, &clock);
        Self { state, clock, dir }
    }

    /// The running application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The injected clock, for advancing time mid-test.
    #[must_use]
    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    /// A second state over the same data directory, simulating a restart.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be reopened.
    #[must_use]
    pub fn reopen(&self) -> AppState {
        Self::open(&self.dir, &self.clock)
    }

    fn open(dir: &TempDir, clock: &Arc<FixedClock>) -> AppState {
        let store = FileStore::open(dir.path()).expect("failed to open store");
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        AppState::new(config, store, Arc::clone(clock))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
