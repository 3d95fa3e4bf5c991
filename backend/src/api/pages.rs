//! Static page handlers

use crate::views;
use crate::views::pages::STUDENTS;
use axum::{http::StatusCode, response::Html};

/// GET / - Home page
pub async fn home() -> Html<String> {
    Html(views::pages::home(&STUDENTS))
}

/// GET /about - About page
pub async fn about() -> Html<String> {
    Html(views::pages::about())
}

/// Any path matching neither a route nor a static file
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(
            StatusCode::NOT_FOUND,
            "The page you are looking for does not exist.",
        )),
    )
}
