//! HTML views
//!
//! Every page is a plain function returning an HTML string wrapped in the
//! main layout. All user-provided text goes through `escape`.

pub mod contacts;
pub mod pages;

use axum::http::StatusCode;
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout with navigation
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
  <link rel="stylesheet" href="/css/style.css">
</head>
<body>
  <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
    <div class="container">
      <a class="navbar-brand" href="/">Contact App</a>
      <div class="navbar-nav">
        <a class="nav-link" href="/">Home</a>
        <a class="nav-link" href="/about">About</a>
        <a class="nav-link" href="/contact">Contact</a>
      </div>
    </div>
  </nav>
  <main class="container mt-4">
{content}
  </main>
</body>
</html>
"#,
        title = escape(title),
        content = content,
    )
}

/// Generic failure page used by the error boundary and unknown paths
pub fn error_page(status: StatusCode, message: &str) -> String {
    let content = format!(
        r#"    <h2>{code} {reason}</h2>
    <p>{message}</p>
    <a href="/contact" class="btn btn-primary">Back to contacts</a>"#,
        code = status.as_u16(),
        reason = escape(status.canonical_reason().unwrap_or("Error")),
        message = escape(message),
    );
    layout("Error", &content)
}

/// Render one alert per message
pub(crate) fn alerts(class: &str, messages: &[&str]) -> String {
    let mut out = String::new();
    for message in messages {
        let _ = writeln!(
            out,
            r#"    <div class="alert alert-{}" role="alert">{}</div>"#,
            class,
            escape(message)
        );
    }
    out
}
