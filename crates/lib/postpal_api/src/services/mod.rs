//! Business logic between handlers and `postpal_core`.

pub mod auth;
pub mod gallery;
pub mod score;
