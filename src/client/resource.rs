//! Binds each DTO type to its REST collection and its slice of the store.

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::store::{entity::EntityAction, entity::EntityState, Action, RootState},
    model::{
        book::{BookDto, BookFieldsDto},
        catalog::{CatalogKind, Identified},
        company::{CompanyDto, CompanyFieldsDto},
        creator::{CreatorDto, CreatorFieldsDto},
        disc::{DiscDto, DiscFieldsDto},
        game::{GameDto, GameFieldsDto},
        series::{SeriesDto, SeriesFieldsDto},
        user::{UserDto, UserFieldsDto},
    },
};

/// A record type the client fetches over REST and keeps normalized in the store.
pub trait Resource:
    Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload accepted by create and replace.
    type Fields: Serialize + Send + Sync;

    /// REST collection segment, e.g. `books` for `/books`.
    const PATH: &'static str;

    fn slice(state: &RootState) -> &EntityState<Self>;

    /// Addresses an entity action to this resource's slice.
    fn action(action: EntityAction<Self>) -> Action;
}

macro_rules! catalog_resource {
    ($dto:ty, $fields:ty, $kind:expr, $slice:ident, $variant:ident) => {
        impl Resource for $dto {
            type Fields = $fields;

            const PATH: &'static str = $kind.path();

            fn slice(state: &RootState) -> &EntityState<Self> {
                &state.$slice
            }

            fn action(action: EntityAction<Self>) -> Action {
                Action::$variant(action)
            }
        }
    };
}

catalog_resource!(SeriesDto, SeriesFieldsDto, CatalogKind::Series, series, Series);
catalog_resource!(CompanyDto, CompanyFieldsDto, CatalogKind::Company, companies, Company);
catalog_resource!(CreatorDto, CreatorFieldsDto, CatalogKind::Creator, creators, Creator);
catalog_resource!(BookDto, BookFieldsDto, CatalogKind::Book, books, Book);
catalog_resource!(DiscDto, DiscFieldsDto, CatalogKind::Disc, discs, Disc);
catalog_resource!(GameDto, GameFieldsDto, CatalogKind::Game, games, Game);

// Users are created through registration; the other CRUD routes follow the catalog layout.
impl Resource for UserDto {
    type Fields = UserFieldsDto;

    const PATH: &'static str = "users";

    fn slice(state: &RootState) -> &EntityState<Self> {
        &state.users
    }

    fn action(action: EntityAction<Self>) -> Action {
        Action::User(action)
    }
}
