//! Data transfer objects shared by the server and the client.
//!
//! Every type in this module crosses the HTTP boundary as JSON. Field names follow the
//! camelCase convention of the REST API and record ids are serialized as `_id`.

pub mod api;
pub mod book;
pub mod catalog;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod item;
pub mod series;
pub mod user;
