use std::fmt;

use serde::{Deserialize, Serialize};

/// The six catalog entity types.
///
/// Anything that needs per-type behavior (routing, API paths, store slices) matches on this
/// enum, so adding a variant forces every dispatch table to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Series,
    Company,
    Creator,
    Book,
    Disc,
    Game,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Series,
        CatalogKind::Company,
        CatalogKind::Creator,
        CatalogKind::Book,
        CatalogKind::Disc,
        CatalogKind::Game,
    ];

    /// Item kinds shown on the home page.
    pub const ITEMS: [CatalogKind; 3] = [CatalogKind::Book, CatalogKind::Disc, CatalogKind::Game];

    /// REST collection segment, e.g. `/companies`.
    pub const fn path(self) -> &'static str {
        match self {
            CatalogKind::Series => "series",
            CatalogKind::Company => "companies",
            CatalogKind::Creator => "creators",
            CatalogKind::Book => "books",
            CatalogKind::Disc => "discs",
            CatalogKind::Game => "games",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Series => "Series",
            CatalogKind::Company => "Company",
            CatalogKind::Creator => "Creator",
            CatalogKind::Book => "Book",
            CatalogKind::Disc => "Disc",
            CatalogKind::Game => "Game",
        }
    }

    pub fn is_item(self) -> bool {
        matches!(
            self,
            CatalogKind::Book | CatalogKind::Disc | CatalogKind::Game
        )
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record carrying the id assigned by the server.
pub trait Identified {
    fn id(&self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = CatalogKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), CatalogKind::ALL.len());
    }

    #[test]
    fn only_books_discs_and_games_are_items() {
        let items: Vec<_> = CatalogKind::ALL
            .into_iter()
            .filter(|k| k.is_item())
            .collect();
        assert_eq!(items, CatalogKind::ITEMS.to_vec());
    }
}
