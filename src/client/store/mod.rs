//! Normalized client-side store.
//!
//! One [`EntityState`] slice per resource plus the session. The store is an ordinary value
//! owned by whoever drives the UI; [`Store::dispatch`] is the only way it changes.

pub mod auth;
pub mod entity;

use dioxus_logger::tracing;

use crate::model::{
    book::BookDto, company::CompanyDto, creator::CreatorDto, disc::DiscDto, game::GameDto,
    series::SeriesDto, user::UserDto,
};

use auth::{AuthAction, AuthState};
use entity::{EntityAction, EntityState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub series: EntityState<SeriesDto>,
    pub companies: EntityState<CompanyDto>,
    pub creators: EntityState<CreatorDto>,
    pub books: EntityState<BookDto>,
    pub discs: EntityState<DiscDto>,
    pub games: EntityState<GameDto>,
    pub users: EntityState<UserDto>,
    pub auth: AuthState,
}

/// An action addressed to exactly one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Series(EntityAction<SeriesDto>),
    Company(EntityAction<CompanyDto>),
    Creator(EntityAction<CreatorDto>),
    Book(EntityAction<BookDto>),
    Disc(EntityAction<DiscDto>),
    Game(EntityAction<GameDto>),
    User(EntityAction<UserDto>),
    Auth(AuthAction),
}

impl RootState {
    /// Routes the action to its slice. Every other slice is returned as it was.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Series(action) => Self {
                series: self.series.reduce(action),
                ..self
            },
            Action::Company(action) => Self {
                companies: self.companies.reduce(action),
                ..self
            },
            Action::Creator(action) => Self {
                creators: self.creators.reduce(action),
                ..self
            },
            Action::Book(action) => Self {
                books: self.books.reduce(action),
                ..self
            },
            Action::Disc(action) => Self {
                discs: self.discs.reduce(action),
                ..self
            },
            Action::Game(action) => Self {
                games: self.games.reduce(action),
                ..self
            },
            Action::User(action) => Self {
                users: self.users.reduce(action),
                ..self
            },
            Action::Auth(action) => Self {
                auth: self.auth.reduce(action),
                ..self
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    state: RootState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!("dispatch {:?}", action);

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }
}
