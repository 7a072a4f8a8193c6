//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are the validated form
//! of an incoming DTO: building one is where request validation happens, and the first
//! failing rule becomes the 400 response message.

pub mod book;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod item;
pub mod series;
pub mod user;
pub mod validate;
