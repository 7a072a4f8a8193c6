use crate::{
    client::{
        store::{entity::EntityAction, Action, Store},
        view::{search_items, series_items},
    },
    model::catalog::CatalogKind,
};

use super::{book, disc, game, series};

fn store() -> Store {
    let mut store = Store::new();
    store.dispatch(Action::Series(EntityAction::GetAllSuccess(vec![
        series(1, "Discworld"),
        series(2, "Empty"),
    ])));
    store.dispatch(Action::Game(EntityAction::GetAllSuccess(vec![game(
        1,
        "Discworld Noir",
        Some("Discworld"),
    )])));
    store.dispatch(Action::Book(EntityAction::GetAllSuccess(vec![
        book(2, "Mort", Some("Discworld")),
        book(1, "Dune", None),
    ])));
    store.dispatch(Action::Disc(EntityAction::GetAllSuccess(vec![disc(
        1,
        "Hogfather",
        Some("Discworld"),
    )])));
    store
}

/// Expected: an empty term lists books, discs then games, each in store order
#[test]
fn search_empty_term_returns_all() {
    let store = store();

    let found: Vec<_> = search_items(store.state(), "  ")
        .iter()
        .map(|v| (v.kind(), v.id()))
        .collect();

    assert_eq!(
        found,
        vec![
            (CatalogKind::Book, 2),
            (CatalogKind::Book, 1),
            (CatalogKind::Disc, 1),
            (CatalogKind::Game, 1),
        ]
    );
}

/// Expected: matching is a case-insensitive substring of the title
#[test]
fn search_filters_by_title() {
    let store = store();

    let titles: Vec<_> = search_items(store.state(), "DISC")
        .iter()
        .map(|v| v.title())
        .collect();

    assert_eq!(titles, vec!["Discworld Noir"]);
    assert!(search_items(store.state(), "nothing like this").is_empty());
}

/// Expected: a series lists the items that name it
#[test]
fn series_items_by_name() {
    let store = store();

    let titles: Vec<_> = series_items(store.state(), 1)
        .iter()
        .map(|v| v.title())
        .collect();

    assert_eq!(titles, vec!["Mort", "Hogfather", "Discworld Noir"]);
    assert!(series_items(store.state(), 2).is_empty());
    assert!(series_items(store.state(), 99).is_empty());
}
