//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM so repository and service tests can arrange state without going
//! through the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let series = factory::create_series(db).await?;
//! let book = factory::book::BookFactory::new(db)
//!     .title("Berserk")
//!     .series(&series.name)
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod helpers;
pub mod series;
pub mod user;

pub use book::create_book;
pub use company::create_company;
pub use creator::create_creator;
pub use disc::create_disc;
pub use game::create_game;
pub use series::create_series;
pub use user::create_user;
