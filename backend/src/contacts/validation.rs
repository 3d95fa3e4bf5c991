//! Form validation for contact create and update
//!
//! Every rule runs; the caller gets one `FieldError` per failed rule, in
//! field order (name, email, phone). An empty list means the input may be
//! written.

use crate::contacts::models::{CreateContactInput, UpdateContactInput};
use crate::contacts::store::ContactStore;
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when the name field is blank
pub const NAME_REQUIRED: &str = "Contact name is required!";
/// Shown when another contact already uses the name
pub const NAME_TAKEN: &str = "Contact name is already registered!";
/// Shown for a malformed email address
pub const INVALID_EMAIL: &str = "Invalid email!";
/// Shown for a phone number that is not an Indonesian mobile number
pub const INVALID_PHONE: &str = "Invalid phone number!";

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

// Operator prefixes for id-ID mobile numbers, local (0) or international (+62) form
static ID_MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[1-9])[\s?|\d]{5,11}$",
    )
    .expect("phone pattern is valid")
});

/// One failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the rule applies to (wire name)
    pub field: &'static str,
    /// Human-readable message shown above the form
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Syntactic email check; requires a dotted domain with an alphabetic TLD
///
/// The local part may contain non-ASCII letters and digits; the domain is
/// ASCII only.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if local.len() <= MAX_EMAIL_LOCAL_LENGTH => EMAIL_RE.is_match(email),
        _ => false,
    }
}

/// Indonesian mobile number check
pub fn is_valid_id_mobile(phone: &str) -> bool {
    ID_MOBILE_RE.is_match(phone)
}

/// Validate the body of a create request
pub async fn validate_new_contact(
    store: &dyn ContactStore,
    input: &CreateContactInput,
) -> Result<Vec<FieldError>, AppError> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError::new("nama", NAME_REQUIRED));
    } else if store.find_by_name(&input.name).await?.is_some() {
        errors.push(FieldError::new("nama", NAME_TAKEN));
    }

    check_email_and_phone(&input.email, &input.phone, &mut errors);
    Ok(errors)
}

/// Validate the body of an update request
///
/// Keeping the current name (`name == old_name`) never counts as a
/// duplicate, even though that name is in the store.
pub async fn validate_contact_update(
    store: &dyn ContactStore,
    input: &UpdateContactInput,
) -> Result<Vec<FieldError>, AppError> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError::new("nama", NAME_REQUIRED));
    } else if input.name != input.old_name && store.find_by_name(&input.name).await?.is_some() {
        errors.push(FieldError::new("nama", NAME_TAKEN));
    }

    check_email_and_phone(&input.email, &input.phone, &mut errors);
    Ok(errors)
}

fn check_email_and_phone(email: &str, phone: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", INVALID_EMAIL));
    }
    if !is_valid_id_mobile(phone) {
        errors.push(FieldError::new("nohp", INVALID_PHONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::memory::MemoryContactStore;
    use crate::contacts::models::ContactFields;

    fn create_input(name: &str, email: &str, phone: &str) -> CreateContactInput {
        CreateContactInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    async fn store_with(names: &[&str]) -> MemoryContactStore {
        let store = MemoryContactStore::new();
        for name in names {
            store
                .insert(ContactFields {
                    name: name.to_string(),
                    phone: "081234567890".to_string(),
                    email: String::new(),
                })
                .await
                .unwrap();
        }
        store
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.id"));
        assert!(is_valid_email("ána@x.com"));
        assert!(is_valid_email("用户@example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana@exámple.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ana@localhost"));
        assert!(!is_valid_email("ana@@x.com"));
        assert!(!is_valid_email("ana.@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(&format!("{}@x.com", "a".repeat(65))));
    }

    #[test]
    fn test_id_mobile_formats() {
        assert!(is_valid_id_mobile("081234567890"));
        assert!(is_valid_id_mobile("+6281234567890"));
        assert!(is_valid_id_mobile("6285712345678"));
        assert!(!is_valid_id_mobile(""));
        assert!(!is_valid_id_mobile("12345"));
        // Landline prefix
        assert!(!is_valid_id_mobile("0215551234"));
        // Unassigned operator prefix
        assert!(!is_valid_id_mobile("081012345678"));
        assert!(!is_valid_id_mobile("0812345678901234"));
    }

    #[tokio::test]
    async fn test_valid_new_contact() {
        let store = store_with(&[]).await;
        let errors = validate_new_contact(&store, &create_input("Ana", "ana@x.com", "081234567890"))
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_empty_email_rejected() {
        let store = store_with(&[]).await;
        let errors = validate_new_contact(&store, &create_input("Ana", "", "081234567890"))
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new("email", INVALID_EMAIL)]);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = store_with(&["Ana"]).await;
        let errors = validate_new_contact(&store, &create_input("Ana", "ana@x.com", "081234567890"))
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new("nama", NAME_TAKEN)]);
    }

    #[tokio::test]
    async fn test_all_rules_reported_in_field_order() {
        let store = store_with(&["Ana"]).await;
        let errors = validate_new_contact(&store, &create_input("Ana", "not-an-email", "123"))
            .await
            .unwrap();
        let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
        assert_eq!(messages, vec![NAME_TAKEN, INVALID_EMAIL, INVALID_PHONE]);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let store = store_with(&[]).await;
        let errors = validate_new_contact(&store, &create_input("  ", "ana@x.com", "081234567890"))
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new("nama", NAME_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_update_keeping_own_name() {
        let store = store_with(&["Ana", "Budi"]).await;
        let input = UpdateContactInput {
            id: "any".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "081234567890".to_string(),
            old_name: "Ana".to_string(),
        };
        assert!(validate_contact_update(&store, &input).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_other_contacts_name() {
        let store = store_with(&["Ana", "Budi"]).await;
        let input = UpdateContactInput {
            id: "any".to_string(),
            name: "Budi".to_string(),
            email: "ana@x.com".to_string(),
            phone: "081234567890".to_string(),
            old_name: "Ana".to_string(),
        };
        let errors = validate_contact_update(&store, &input).await.unwrap();
        assert_eq!(errors, vec![FieldError::new("nama", NAME_TAKEN)]);
    }
}
