//! Contact Manager Backend Library
//!
//! Server-rendered contact book: list, add, edit, view and delete contacts.
//! The binary in `src/main.rs` only loads configuration and serves `api::app`.

pub mod api;
pub mod config;
/// Contact records, validation and persistence
pub mod contacts;
pub mod error;
pub mod middleware;
pub mod session;
pub mod state;
pub mod views;
