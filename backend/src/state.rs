//! Shared router state

use crate::config::Config;
use crate::contacts::{self, ContactStore};
use crate::error::AppError;
use crate::session::FlashStore;
use std::sync::Arc;

/// State handed to every handler
///
/// Cheap to clone; the store and flash map are shared behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Contacts collection
    pub store: Arc<dyn ContactStore>,
    /// Pending flash messages per session
    pub flash: Arc<FlashStore>,
}

impl AppState {
    /// Build state around an existing store
    pub fn new(store: Arc<dyn ContactStore>, flash: FlashStore) -> Self {
        Self {
            store,
            flash: Arc::new(flash),
        }
    }

    /// Open the configured store and set up the flash store
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let store = contacts::open_store(&config.persistence).await?;
        Ok(Self::new(store, FlashStore::new(config.session.flash_ttl())))
    }
}
