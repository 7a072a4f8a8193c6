use crate::server::model::item::ItemParams;

mod book;
mod game;
mod series;
mod user;

/// Minimal valid base fields shared by book, disc and game tests.
fn item_params(title: &str) -> ItemParams {
    ItemParams {
        title: title.to_string(),
        physical: true,
        digital: false,
        publisher: "Publisher".to_string(),
        list_price: None,
        image: None,
        location: None,
        checked_out: false,
        checked_out_by: None,
        series: None,
    }
}
