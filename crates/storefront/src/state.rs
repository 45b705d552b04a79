//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::store::ShopState;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The mutable shop state sits
/// behind a single `Mutex`: handlers lock it for the duration of one event,
/// which gives the "one event = one atomic state update" model - there is
/// exactly one logical writer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    shop: Mutex<ShopState>,
}

impl AppState {
    /// Create a new application state with an empty cart and log.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::default(),
                shop: Mutex::new(ShopState::default()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the shop state for one event.
    ///
    /// A poisoned lock is recovered rather than propagated: the state has no
    /// invariants that a panicking handler could half-apply across await
    /// points, since mutations are synchronous under the guard.
    pub fn shop(&self) -> MutexGuard<'_, ShopState> {
        self.inner
            .shop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let state = AppState::new(StorefrontConfig::default());
        let clone = state.clone();

        let product = state.catalog().products()[0].clone();
        state.shop().add_to_cart(product);

        assert_eq!(clone.shop().cart().len(), 1);
    }
}
