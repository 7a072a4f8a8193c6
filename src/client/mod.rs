pub mod actions;
pub mod api;
pub mod assure;
pub mod model;
pub mod resource;
pub mod selector;
pub mod store;
pub mod view;

#[cfg(test)]
mod test;

pub use api::ApiClient;
pub use store::Store;
