//! Views derived from the store for the home page and the series page.

use crate::{
    client::store::RootState,
    model::{
        book::BookDto,
        catalog::{CatalogKind, Identified},
        disc::DiscDto,
        game::GameDto,
        item::{CatalogItem, ItemDto},
    },
};

/// A book, disc or game borrowed from the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemView<'a> {
    Book(&'a BookDto),
    Disc(&'a DiscDto),
    Game(&'a GameDto),
}

impl<'a> ItemView<'a> {
    pub fn kind(&self) -> CatalogKind {
        match self {
            ItemView::Book(_) => CatalogKind::Book,
            ItemView::Disc(_) => CatalogKind::Disc,
            ItemView::Game(_) => CatalogKind::Game,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            ItemView::Book(book) => book.id(),
            ItemView::Disc(disc) => disc.id(),
            ItemView::Game(game) => game.id(),
        }
    }

    pub fn item(&self) -> &'a ItemDto {
        match self {
            ItemView::Book(book) => book.item(),
            ItemView::Disc(disc) => disc.item(),
            ItemView::Game(game) => game.item(),
        }
    }

    pub fn title(&self) -> &'a str {
        &self.item().title
    }
}

/// Books, then discs, then games, each in store order.
pub fn all_items(state: &RootState) -> Vec<ItemView<'_>> {
    state
        .books
        .iter()
        .map(ItemView::Book)
        .chain(state.discs.iter().map(ItemView::Disc))
        .chain(state.games.iter().map(ItemView::Game))
        .collect()
}

/// Items whose title contains `term`, ignoring case. A blank term matches everything.
pub fn search_items<'a>(state: &'a RootState, term: &str) -> Vec<ItemView<'a>> {
    let term = term.trim().to_lowercase();

    all_items(state)
        .into_iter()
        .filter(|view| term.is_empty() || view.title().to_lowercase().contains(&term))
        .collect()
}

/// Items that name the series as theirs. Empty when the series is not in the store.
pub fn series_items(state: &RootState, series_id: i32) -> Vec<ItemView<'_>> {
    let Some(series) = state.series.get(series_id) else {
        return Vec::new();
    };

    all_items(state)
        .into_iter()
        .filter(|view| view.item().series.as_deref() == Some(series.name.as_str()))
        .collect()
}
