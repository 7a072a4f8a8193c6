pub use super::book::Entity as Book;
pub use super::company::Entity as Company;
pub use super::creator::Entity as Creator;
pub use super::disc::Entity as Disc;
pub use super::game::Entity as Game;
pub use super::series::Entity as Series;
pub use super::user::Entity as User;
