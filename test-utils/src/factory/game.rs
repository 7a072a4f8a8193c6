//! Game factory for creating test game entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    publisher: String,
    series: Option<String>,
    platforms: Vec<String>,
    multiplayer: bool,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"`
    /// - publisher: `"Publisher"`
    /// - platforms: `["PC"]`
    /// - series: none, single player
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Game {}", next_id()),
            publisher: "Publisher".to_string(),
            series: None,
            platforms: vec!["PC".to_string()],
            multiplayer: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn platforms<S: AsRef<str>>(mut self, platforms: &[S]) -> Self {
        self.platforms = platforms.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn multiplayer(mut self, multiplayer: bool) -> Self {
        self.multiplayer = multiplayer;
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let empty: [&str; 0] = [];
        entity::game::ActiveModel {
            title: ActiveValue::Set(self.title),
            physical: ActiveValue::Set(false),
            digital: ActiveValue::Set(true),
            publisher: ActiveValue::Set(self.publisher),
            list_price: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            checked_out: ActiveValue::Set(false),
            checked_out_by: ActiveValue::Set(None),
            series: ActiveValue::Set(self.series),
            platforms: ActiveValue::Set(json_list(&self.platforms)),
            languages: ActiveValue::Set(json_list(&empty)),
            multiplayer: ActiveValue::Set(self.multiplayer),
            genre: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
