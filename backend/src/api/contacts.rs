//! Contact page and form handlers
//!
//! Successful writes queue a flash message and redirect to the list.
//! Failed validation re-renders the submitting form with status 200.

use crate::contacts::validation::{validate_contact_update, validate_new_contact};
use crate::contacts::{CreateContactInput, DeleteContactInput, UpdateContactInput};
use crate::error::AppError;
use crate::session::SessionToken;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use tracing::info;

/// Where successful writes redirect to
pub const CONTACT_LIST_PATH: &str = "/contact";

/// Flash after a create
pub const CONTACT_ADDED: &str = "Contact added successfully!";
/// Flash after an update
pub const CONTACT_UPDATED: &str = "Contact updated successfully!";
/// Flash after a delete
pub const CONTACT_DELETED: &str = "Contact deleted successfully!";

/// GET /contact - List all contacts with any pending flash message
pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(session): Extension<SessionToken>,
) -> Result<Html<String>, AppError> {
    let contacts = state.store.find_all().await?;
    let flash = state.flash.take(&session).await;
    Ok(Html(views::contacts::list(&contacts, &flash)))
}

/// GET /contact/add - Empty add form
pub async fn add_contact_form() -> Html<String> {
    Html(views::contacts::add_form(&CreateContactInput::default(), &[]))
}

/// POST /contact - Create a contact
pub async fn create_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionToken>,
    Form(input): Form<CreateContactInput>,
) -> Result<Response, AppError> {
    let errors = validate_new_contact(state.store.as_ref(), &input).await?;
    if !errors.is_empty() {
        info!(name = %input.name, errors = errors.len(), "Rejected new contact");
        return Ok(Html(views::contacts::add_form(&input, &errors)).into_response());
    }

    let contact = state.store.insert(input.into()).await?;
    info!(contact_id = %contact.id, name = %contact.name, "Contact created");

    state.flash.push(&session, CONTACT_ADDED).await;
    Ok(Redirect::to(CONTACT_LIST_PATH).into_response())
}

/// GET /contact/edit/:nama - Edit form for the named contact
pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let person = state
        .store
        .find_by_name(&name)
        .await?
        .map(|contact| UpdateContactInput::from(&contact));
    Ok(Html(views::contacts::edit_form(person.as_ref(), &[])))
}

/// PUT /contact - Update a contact
pub async fn update_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionToken>,
    Form(input): Form<UpdateContactInput>,
) -> Result<Response, AppError> {
    let errors = validate_contact_update(state.store.as_ref(), &input).await?;
    if !errors.is_empty() {
        info!(contact_id = %input.id, errors = errors.len(), "Rejected contact update");
        return Ok(Html(views::contacts::edit_form(Some(&input), &errors)).into_response());
    }

    let (id, fields) = input.into_parts();
    if !state.store.update_by_id(&id, fields).await? {
        return Err(AppError::ContactNotFound(id));
    }
    info!(contact_id = %id, "Contact updated");

    state.flash.push(&session, CONTACT_UPDATED).await;
    Ok(Redirect::to(CONTACT_LIST_PATH).into_response())
}

/// DELETE /contact - Delete a contact; unknown ids are a no-op
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionToken>,
    Form(input): Form<DeleteContactInput>,
) -> Result<Redirect, AppError> {
    let removed = state.store.delete_by_id(&input.id).await?;
    info!(contact_id = %input.id, removed, "Contact delete");

    state.flash.push(&session, CONTACT_DELETED).await;
    Ok(Redirect::to(CONTACT_LIST_PATH))
}

/// GET /contact/:nama - Detail page for the named contact
pub async fn show_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let person = state.store.find_by_name(&name).await?;
    Ok(Html(views::contacts::detail(person.as_ref())))
}
