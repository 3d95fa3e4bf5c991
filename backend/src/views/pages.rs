//! Static pages

use super::{escape, layout};
use std::fmt::Write;

/// Demo row on the home page
#[derive(Debug, Clone, Copy)]
pub struct Student {
    /// Display name
    pub name: &'static str,
    /// Email address
    pub email: &'static str,
}

/// Fixed demo data shown on the home page; unrelated to stored contacts
pub const STUDENTS: [Student; 3] = [
    Student {
        name: "John Doe",
        email: "john@gmail.com",
    },
    Student {
        name: "Abam",
        email: "abam@gmail.com",
    },
    Student {
        name: "Skywalker",
        email: "skies@gmail.com",
    },
];

/// Home page with the demo student table
pub fn home(students: &[Student]) -> String {
    let mut rows = String::new();
    for (i, student) in students.iter().enumerate() {
        let _ = writeln!(
            rows,
            "        <tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td></tr>",
            i + 1,
            escape(student.name),
            escape(student.email)
        );
    }

    let content = format!(
        r#"    <h1>Hello, welcome to the Contact App</h1>
    <h3 class="mt-4">Students</h3>
    <table class="table">
      <thead>
        <tr><th scope="col">#</th><th scope="col">Name</th><th scope="col">Email</th></tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>"#
    );
    layout("Home", &content)
}

/// About page
pub fn about() -> String {
    layout(
        "About",
        r#"    <h1>About</h1>
    <p>A small server-rendered address book: add, edit, view and delete contacts.</p>"#,
    )
}
