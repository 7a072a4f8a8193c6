//! Book data repository for database operations.

use dioxus_logger::tracing;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::book::{Book, BookParams},
    util::json::to_json_list,
};

/// Repository providing database operations for book management.
pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: BookParams) -> Result<Book, DbErr> {
        let mut active_model = entity::book::ActiveModel {
            ..Default::default()
        };
        apply(&mut active_model, params);

        let entity = active_model.insert(self.db).await?;

        Book::from_entity(entity)
    }

    /// Gets every book in id order.
    ///
    /// A row that cannot be read back (an unknown stored type) is logged and left out
    /// rather than failing the whole listing.
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let books = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|entity| match Book::from_entity(entity) {
                Ok(book) => Some(book),
                Err(err) => {
                    tracing::warn!("Skipping unreadable book row: {}", err);
                    None
                }
            })
            .collect();

        Ok(books)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        entity::prelude::Book::find_by_id(id)
            .one(self.db)
            .await?
            .map(Book::from_entity)
            .transpose()
    }

    /// Overwrites every field of an existing book.
    ///
    /// # Returns
    /// - `Ok(Book)` - The updated book
    /// - `Err(DbErr::RecordNotFound)` - No book exists with the specified ID
    pub async fn update(&self, id: i32, params: BookParams) -> Result<Book, DbErr> {
        let book = entity::prelude::Book::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Book with id {} not found", id)))?;

        let mut active_model: entity::book::ActiveModel = book.into();
        apply(&mut active_model, params);

        let entity = active_model.update(self.db).await?;

        Book::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Book::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn apply(active_model: &mut entity::book::ActiveModel, params: BookParams) {
    let item = params.item;
    active_model.title = ActiveValue::Set(item.title);
    active_model.physical = ActiveValue::Set(item.physical);
    active_model.digital = ActiveValue::Set(item.digital);
    active_model.publisher = ActiveValue::Set(item.publisher);
    active_model.list_price = ActiveValue::Set(item.list_price);
    active_model.image = ActiveValue::Set(item.image);
    active_model.location = ActiveValue::Set(item.location);
    active_model.checked_out = ActiveValue::Set(item.checked_out);
    active_model.checked_out_by = ActiveValue::Set(item.checked_out_by);
    active_model.series = ActiveValue::Set(item.series);
    active_model.authors = ActiveValue::Set(to_json_list(&params.authors));
    active_model.language = ActiveValue::Set(params.language);
    active_model.book_type = ActiveValue::Set(params.book_type.as_str().to_string());
    active_model.volume = ActiveValue::Set(params.volume);
    active_model.isbn = ActiveValue::Set(params.isbn);
}
