//! Contact persistence interface

use crate::contacts::models::{Contact, ContactFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Document-style access to the contacts collection
///
/// Lookups are exact, case-sensitive matches. Nothing here enforces name
/// uniqueness; callers check with `find_by_name` before writing.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts in insertion order
    async fn find_all(&self) -> Result<Vec<Contact>, AppError>;

    /// The contact with exactly this name, if any
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, AppError>;

    /// Store a new contact and return it with its assigned id
    async fn insert(&self, fields: ContactFields) -> Result<Contact, AppError>;

    /// Overwrite name, phone and email of the contact with `id`
    ///
    /// Returns `false` when no contact has that id.
    async fn update_by_id(&self, id: &str, fields: ContactFields) -> Result<bool, AppError>;

    /// Remove the contact with `id`
    ///
    /// Returns `false` when no contact has that id; that is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
}
