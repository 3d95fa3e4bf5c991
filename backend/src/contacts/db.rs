//! SQLite-backed contact store
//!
//! Handles all database interactions for the contacts table.

use crate::contacts::models::{Contact, ContactFields};
use crate::contacts::store::ContactStore;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

const CREATE_CONTACTS_SQL: &str = include_str!("../../migrations/001_create_contacts.sql");

/// Contact store backed by a SQLite connection pool
pub struct SqliteContactStore {
    pool: SqlitePool,
}

impl SqliteContactStore {
    /// Open (creating if needed) the database at `db_path` and run migrations
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file, with or without a
    ///   `sqlite:` prefix
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let file_path = db_path.strip_prefix("sqlite:").unwrap_or(db_path);
        if let Some(parent) = PathBuf::from(file_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", file_path))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", file_path);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");

        for statement in split_statements(CREATE_CONTACTS_SQL) {
            sqlx::query(&statement).execute(&self.pool).await?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }
}

/// Strip `--` comments and split a migration script into single statements
fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned = String::new();
    for line in sql.lines() {
        let code = match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let code = code.trim();
        if !code.is_empty() {
            cleaned.push_str(code);
            cleaned.push(' ');
        }
    }

    cleaned
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email, created_at FROM contacts ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email, created_at FROM contacts WHERE name = ? ORDER BY rowid ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn insert(&self, fields: ContactFields) -> Result<Contact, AppError> {
        let contact = Contact::new(Uuid::new_v4().to_string(), fields);
        sqlx::query(
            "INSERT INTO contacts (id, name, phone, email, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.created_at)
        .execute(&self.pool)
        .await?;

        debug!(contact_id = %contact.id, "Inserted contact");
        Ok(contact)
    }

    async fn update_by_id(&self, id: &str, fields: ContactFields) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE contacts SET name = ?, phone = ?, email = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(contact_id = %id, rows = result.rows_affected(), "Updated contact");
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(contact_id = %id, rows = result.rows_affected(), "Deleted contact");
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (SqliteContactStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("contacts.db");
        let store = SqliteContactStore::new(db_path.to_str().unwrap())
            .await
            .expect("Failed to create test database");
        (store, temp_dir)
    }

    fn fields(name: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            phone: "081234567890".to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_split_statements_strips_comments() {
        let statements = split_statements(CREATE_CONTACTS_SQL);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS contacts"));
        assert!(statements.iter().all(|s| !s.contains("--")));
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let (store, temp_dir) = create_test_store().await;
        store.insert(fields("Ana")).await.unwrap();
        drop(store);

        let db_path = temp_dir.path().join("contacts.db");
        let reopened = SqliteContactStore::new(db_path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(reopened.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_and_find_by_name() {
        let (store, _temp_dir) = create_test_store().await;
        let created = store.insert(fields("Ana")).await.unwrap();
        assert!(!created.id.is_empty());

        let found = store.find_by_name("Ana").await.unwrap().unwrap();
        assert_eq!(found, created);

        // Exact, case-sensitive match only
        assert!(store.find_by_name("ana").await.unwrap().is_none());
        assert!(store.find_by_name("An").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let (store, _temp_dir) = create_test_store().await;
        for name in ["Citra", "Ana", "Budi"] {
            store.insert(fields(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Citra", "Ana", "Budi"]);
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let (store, _temp_dir) = create_test_store().await;
        let created = store.insert(fields("Ana")).await.unwrap();

        let updated = store
            .update_by_id(&created.id, fields("Anabel"))
            .await
            .unwrap();
        assert!(updated);
        assert!(store.find_by_name("Ana").await.unwrap().is_none());

        let found = store.find_by_name("Anabel").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.email, "anabel@x.com");

        assert!(!store.update_by_id("missing", fields("X")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id_is_idempotent() {
        let (store, _temp_dir) = create_test_store().await;
        let ana = store.insert(fields("Ana")).await.unwrap();
        store.insert(fields("Budi")).await.unwrap();

        assert!(store.delete_by_id(&ana.id).await.unwrap());
        assert!(!store.delete_by_id(&ana.id).await.unwrap());

        let remaining = store.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Budi");
    }
}
