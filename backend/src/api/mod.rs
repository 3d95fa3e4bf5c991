//! API module
//!
//! HTTP handlers and the router that wires them together.

pub mod contacts;
pub mod pages;

use crate::middleware::{override_method, request_id_middleware};
use crate::session::session_middleware;
use crate::state::AppState;
use axum::{extract::Request, handler::HandlerWithoutStateExt, routing::get, Router};
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// The full application service: method override in front of the router
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the router with all routes, static files and middleware
pub fn router(state: AppState, static_dir: &str) -> Router {
    let static_files =
        ServeDir::new(static_dir).not_found_service(pages::not_found.into_service());

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route(
            "/contact",
            get(contacts::list_contacts)
                .post(contacts::create_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route("/contact/add", get(contacts::add_contact_form))
        .route("/contact/edit/:nama", get(contacts::edit_contact_form))
        .route("/contact/:nama", get(contacts::show_contact))
        .fallback_service(static_files)
        // Middleware (order matters - request_id should be outermost)
        .layer(axum::middleware::from_fn(session_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Wrap the router so method overrides are applied before routing
pub fn app(state: AppState, static_dir: &str) -> App {
    MapRequestLayer::new(override_method as fn(Request) -> Request)
        .layer(router(state, static_dir))
}
