//! HTTP request handlers.
//!
//! Handlers extract and validate the request, call a service and convert the result to a
//! DTO. Every route except registration, authentication and the API document takes an
//! `AuthenticatedUser`.

pub mod catalog;
pub mod docs;
pub mod user;

#[cfg(test)]
mod test;
