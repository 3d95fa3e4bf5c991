//! Contact pages: list, detail, add and edit forms

use super::{alerts, escape, layout};
use crate::contacts::{Contact, CreateContactInput, FieldError, UpdateContactInput};
use std::fmt::Write;

/// Percent-encode a contact name for use as a URL path segment
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

/// Contact list with pending flash messages
pub fn list(contacts: &[Contact], flash: &[String]) -> String {
    let flash: Vec<&str> = flash.iter().map(String::as_str).collect();
    let mut content = String::from("    <h2>Contact List</h2>\n");
    content.push_str(&alerts("success", &flash));
    content.push_str(
        r#"    <a href="/contact/add" class="btn btn-primary mb-3">Add contact</a>
"#,
    );

    if contacts.is_empty() {
        content.push_str(
            r#"    <div class="alert alert-danger" role="alert">No contacts yet.</div>"#,
        );
        return layout("Contact", &content);
    }

    content.push_str(
        r#"    <table class="table">
      <thead>
        <tr><th scope="col">#</th><th scope="col">Name</th><th scope="col">Phone</th><th scope="col">Action</th></tr>
      </thead>
      <tbody>
"#,
    );
    for (i, contact) in contacts.iter().enumerate() {
        let _ = writeln!(
            content,
            r#"        <tr><th scope="row">{}</th><td>{}</td><td>{}</td><td><a href="/contact/{}" class="badge text-bg-success">Detail</a></td></tr>"#,
            i + 1,
            escape(&contact.name),
            escape(&contact.phone),
            encode_segment(&contact.name),
        );
    }
    content.push_str("      </tbody>\n    </table>");

    layout("Contact", &content)
}

/// Detail card for one contact; `None` renders a not-found notice
pub fn detail(person: Option<&Contact>) -> String {
    let Some(person) = person else {
        return layout("Person Detail", &not_found_notice());
    };

    let content = format!(
        r#"    <div class="card" style="width: 24rem;">
      <div class="card-body">
        <h5 class="card-title">{name}</h5>
        <h6 class="card-subtitle mb-2 text-muted">{phone}</h6>
        <p class="card-text">{email}</p>
        <a href="/contact/edit/{segment}" class="btn btn-success">Edit</a>
        <form action="/contact?_method=DELETE" method="post" class="d-inline">
          <input type="hidden" name="_id" value="{id}">
          <button type="submit" class="btn btn-danger">Delete</button>
        </form>
        <a href="/contact" class="card-link ms-2">Back to contact list</a>
      </div>
    </div>"#,
        name = escape(&person.name),
        phone = escape(&person.phone),
        email = escape(&person.email),
        segment = encode_segment(&person.name),
        id = escape(&person.id),
    );
    layout("Person Detail", &content)
}

/// Empty or re-rendered add form
pub fn add_form(values: &CreateContactInput, errors: &[FieldError]) -> String {
    let content = format!(
        r#"    <h2>Add Contact</h2>
{errors}    <form action="/contact" method="post">
{fields}      <button type="submit" class="btn btn-primary">Add contact</button>
    </form>"#,
        errors = error_alerts(errors),
        fields = contact_fields(&values.name, &values.email, &values.phone),
    );
    layout("Add Contact", &content)
}

/// Edit form pre-filled with stored or submitted values; `None` renders a
/// not-found notice
pub fn edit_form(person: Option<&UpdateContactInput>, errors: &[FieldError]) -> String {
    let Some(person) = person else {
        return layout("Edit Contact", &not_found_notice());
    };

    let content = format!(
        r#"    <h2>Edit Contact</h2>
{errors}    <form action="/contact?_method=PUT" method="post">
      <input type="hidden" name="_id" value="{id}">
      <input type="hidden" name="oldNama" value="{old_name}">
{fields}      <button type="submit" class="btn btn-primary">Save changes</button>
    </form>"#,
        errors = error_alerts(errors),
        id = escape(&person.id),
        old_name = escape(&person.old_name),
        fields = contact_fields(&person.name, &person.email, &person.phone),
    );
    layout("Edit Contact", &content)
}

fn error_alerts(errors: &[FieldError]) -> String {
    let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
    alerts("danger", &messages)
}

fn contact_fields(name: &str, email: &str, phone: &str) -> String {
    format!(
        r#"      <div class="mb-3">
        <label for="nama" class="form-label">Name</label>
        <input type="text" class="form-control" id="nama" name="nama" value="{name}" required>
      </div>
      <div class="mb-3">
        <label for="email" class="form-label">Email</label>
        <input type="email" class="form-control" id="email" name="email" value="{email}" required>
      </div>
      <div class="mb-3">
        <label for="nohp" class="form-label">Phone</label>
        <input type="text" class="form-control" id="nohp" name="nohp" value="{phone}" required>
      </div>
"#,
        name = escape(name),
        email = escape(email),
        phone = escape(phone),
    )
}

fn not_found_notice() -> String {
    r#"    <div class="alert alert-warning" role="alert">Contact not found.</div>
    <a href="/contact" class="btn btn-primary">Back to contact list</a>"#
        .to_string()
}
