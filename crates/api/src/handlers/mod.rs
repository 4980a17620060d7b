//! Request handlers.
//!
//! Handlers bound their store calls with the configured timeout and map
//! failures through [`AppError`](crate::error::AppError).

pub mod movie;
