//! In-memory contact store
//!
//! Same semantics as the SQLite store, kept in a `Vec` so insertion order is
//! the natural order. Selected with `DATABASE_PATH=:memory:` and used by tests.

use crate::contacts::models::{Contact, ContactFields};
use crate::contacts::store::ContactStore;
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Contact store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: Mutex<Vec<Contact>>,
}

impl MemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.contacts.lock().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, AppError> {
        Ok(self
            .contacts
            .lock()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn insert(&self, fields: ContactFields) -> Result<Contact, AppError> {
        let contact = Contact::new(Uuid::new_v4().to_string(), fields);
        self.contacts.lock().await.push(contact.clone());
        Ok(contact)
    }

    async fn update_by_id(&self, id: &str, fields: ContactFields) -> Result<bool, AppError> {
        let mut contacts = self.contacts.lock().await;
        match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.name = fields.name;
                contact.phone = fields.phone;
                contact.email = fields.email;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let mut contacts = self.contacts.lock().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = MemoryContactStore::new();
        let created = store
            .insert(ContactFields {
                name: "Ana".to_string(),
                phone: "081234567890".to_string(),
                email: String::new(),
            })
            .await
            .unwrap();

        let changed = ContactFields {
            name: "Ana".to_string(),
            phone: "085712345678".to_string(),
            email: "ana@x.com".to_string(),
        };
        assert!(store.update_by_id(&created.id, changed).await.unwrap());

        let found = store.find_by_name("Ana").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.created_at, created.created_at);
        assert_eq!(found.phone, "085712345678");
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let store = MemoryContactStore::new();
        store
            .insert(ContactFields {
                name: "Ana".to_string(),
                phone: "081234567890".to_string(),
                email: String::new(),
            })
            .await
            .unwrap();

        assert!(!store.delete_by_id("nope").await.unwrap());
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
