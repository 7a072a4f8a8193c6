//! Book factory for creating test book entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db)
///     .title("Mort")
///     .series("Discworld")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    publisher: String,
    series: Option<String>,
    authors: Vec<String>,
    book_type: String,
    checked_out: bool,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - publisher: `"Publisher"`
    /// - authors: `["Author"]`
    /// - book_type: `"Novel"`
    /// - series: none, not checked out
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Book {}", next_id()),
            publisher: "Publisher".to_string(),
            series: None,
            authors: vec!["Author".to_string()],
            book_type: "Novel".to_string(),
            checked_out: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn authors<S: AsRef<str>>(mut self, authors: &[S]) -> Self {
        self.authors = authors.iter().map(|a| a.as_ref().to_string()).collect();
        self
    }

    /// Sets the raw stored type column; any string is accepted.
    pub fn book_type(mut self, book_type: impl Into<String>) -> Self {
        self.book_type = book_type.into();
        self
    }

    pub fn checked_out(mut self, checked_out: bool) -> Self {
        self.checked_out = checked_out;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            physical: ActiveValue::Set(true),
            digital: ActiveValue::Set(false),
            publisher: ActiveValue::Set(self.publisher),
            list_price: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            checked_out: ActiveValue::Set(self.checked_out),
            checked_out_by: ActiveValue::Set(None),
            series: ActiveValue::Set(self.series),
            authors: ActiveValue::Set(json_list(&self.authors)),
            language: ActiveValue::Set(None),
            book_type: ActiveValue::Set(self.book_type),
            volume: ActiveValue::Set(None),
            isbn: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
