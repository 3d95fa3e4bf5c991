//! Contact data models
//!
//! `Contact` is the stored record. The `*Input` structs are the typed form
//! bodies of the create/update/delete requests, keeping the wire field names
//! (`nama`, `nohp`, `_id`, `oldNama`) out of the rest of the code. Every
//! field must be present in the body; a missing one is rejected by the
//! `Form` extractor before any handler runs.

use chrono::Utc;
use serde::Deserialize;
use sqlx::FromRow;

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Contact {
    /// Identifier assigned by the store on insert, never changes
    pub id: String,
    /// Unique display name, also the lookup key in URLs
    pub name: String,
    /// Mobile phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// When the contact was created (Unix timestamp)
    pub created_at: i64,
}

impl Contact {
    /// Build a contact from its editable fields
    pub fn new(id: String, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// The editable part of a contact, as written by insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    /// Contact name
    pub name: String,
    /// Mobile phone number
    pub phone: String,
    /// Email address
    pub email: String,
}

/// Form body of `POST /contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateContactInput {
    /// Requested name
    #[serde(rename = "nama")]
    pub name: String,
    /// Requested email
    pub email: String,
    /// Requested phone number
    #[serde(rename = "nohp")]
    pub phone: String,
}

impl From<CreateContactInput> for ContactFields {
    fn from(input: CreateContactInput) -> Self {
        Self {
            name: input.name,
            phone: input.phone,
            email: input.email,
        }
    }
}

/// Form body of `PUT /contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateContactInput {
    /// Id of the contact being edited
    #[serde(rename = "_id")]
    pub id: String,
    /// New name
    #[serde(rename = "nama")]
    pub name: String,
    /// New email
    pub email: String,
    /// New phone number
    #[serde(rename = "nohp")]
    pub phone: String,
    /// Name the contact had when the edit form was opened
    #[serde(rename = "oldNama")]
    pub old_name: String,
}

impl UpdateContactInput {
    /// Split into the target id and the fields to write
    pub fn into_parts(self) -> (String, ContactFields) {
        (
            self.id,
            ContactFields {
                name: self.name,
                phone: self.phone,
                email: self.email,
            },
        )
    }
}

/// Pre-fills the edit form from the stored record
impl From<&Contact> for UpdateContactInput {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            old_name: contact.name.clone(),
        }
    }
}

/// Form body of `DELETE /contact`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteContactInput {
    /// Id of the contact to remove
    #[serde(rename = "_id")]
    pub id: String,
}
