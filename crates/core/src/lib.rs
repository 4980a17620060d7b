//! Domain layer for the movies service.
//!
//! Holds the movie record shape, input validation, the store abstraction
//! handlers are written against, and an in-memory store. Nothing in here
//! depends on a database driver or on the HTTP stack.

pub mod error;
pub mod movie;
pub mod store;
pub mod types;
pub mod validation;
