//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart_store::{CartStoreError, FsCartStore};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the cart store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    carts: FsCartStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart store directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, CartStoreError> {
        let carts = FsCartStore::new(&config.cart_store_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, carts }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &FsCartStore {
        &self.inner.carts
    }
}
