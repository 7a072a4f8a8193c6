//! Disc data repository for database operations.

use dioxus_logger::tracing;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::disc::{Disc, DiscParams},
    util::json::to_json_list,
};

/// Repository providing database operations for disc management.
pub struct DiscRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: DiscParams) -> Result<Disc, DbErr> {
        let mut active_model = entity::disc::ActiveModel {
            ..Default::default()
        };
        apply(&mut active_model, params);

        let entity = active_model.insert(self.db).await?;

        Disc::from_entity(entity)
    }

    /// Gets every disc in id order.
    ///
    /// A row that cannot be read back (an unknown stored format) is logged and left out
    /// rather than failing the whole listing.
    pub async fn get_all(&self) -> Result<Vec<Disc>, DbErr> {
        let discs = entity::prelude::Disc::find()
            .order_by_asc(entity::disc::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|entity| match Disc::from_entity(entity) {
                Ok(disc) => Some(disc),
                Err(err) => {
                    tracing::warn!("Skipping unreadable disc row: {}", err);
                    None
                }
            })
            .collect();

        Ok(discs)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Disc>, DbErr> {
        entity::prelude::Disc::find_by_id(id)
            .one(self.db)
            .await?
            .map(Disc::from_entity)
            .transpose()
    }

    /// Overwrites every field of an existing disc.
    ///
    /// # Returns
    /// - `Ok(Disc)` - The updated disc
    /// - `Err(DbErr::RecordNotFound)` - No disc exists with the specified ID
    pub async fn update(&self, id: i32, params: DiscParams) -> Result<Disc, DbErr> {
        let disc = entity::prelude::Disc::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Disc with id {} not found", id)))?;

        let mut active_model: entity::disc::ActiveModel = disc.into();
        apply(&mut active_model, params);

        let entity = active_model.update(self.db).await?;

        Disc::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Disc::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn apply(active_model: &mut entity::disc::ActiveModel, params: DiscParams) {
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

    let format: Vec<String> = params
        .format
        .iter()
        .map(|f| f.as_str().to_string())
        .collect();
    active_model.format = ActiveValue::Set(to_json_list(&format));
    active_model.languages = ActiveValue::Set(to_json_list(&params.languages));
    active_model.subtitles = ActiveValue::Set(to_json_list(&params.subtitles));
    active_model.volume = ActiveValue::Set(params.volume);
    active_model.director = ActiveValue::Set(params.director);
    active_model.studio = ActiveValue::Set(params.studio);
    active_model.is_collection = ActiveValue::Set(params.is_collection);
}
