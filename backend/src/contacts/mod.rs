//! Contacts module
//!
//! The contact record, its form inputs, validation rules and the stores that
//! persist it.

pub mod db;
pub mod memory;
pub mod models;
pub mod store;
pub mod validation;

pub use db::SqliteContactStore;
pub use memory::MemoryContactStore;
pub use models::{
    Contact, ContactFields, CreateContactInput, DeleteContactInput, UpdateContactInput,
};
pub use store::ContactStore;
pub use validation::FieldError;

use crate::config::PersistenceConfig;
use crate::error::AppError;
use std::sync::Arc;

/// Database path that selects the in-memory store
pub const MEMORY_DATABASE: &str = ":memory:";

/// Open the store named by the configuration
pub async fn open_store(config: &PersistenceConfig) -> Result<Arc<dyn ContactStore>, AppError> {
    if config.database_path == MEMORY_DATABASE {
        tracing::warn!("Using in-memory contact store; contacts are lost on shutdown");
        return Ok(Arc::new(MemoryContactStore::new()));
    }
    Ok(Arc::new(
        SqliteContactStore::new(&config.database_path).await?,
    ))
}
