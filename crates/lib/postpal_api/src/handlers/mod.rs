//! Request handlers.

pub mod auth;
pub mod gallery;
pub mod health;
pub mod protected;
pub mod score;
