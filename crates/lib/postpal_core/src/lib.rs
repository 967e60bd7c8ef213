//! # postpal_core
//!
//! Core domain logic for PostPal: credential storage, password hashing,
//! token issuance/verification, and the image gallery.

pub mod auth;
pub mod gallery;
pub mod migrate;
pub mod models;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
