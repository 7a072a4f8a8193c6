use super::item_params;
use crate::server::{data::game::GameRepository, model::game::GameParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a game and reading it back.
///
/// Expected: Ok(Game) equal to the stored row
#[tokio::test]
async fn creates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let created = repo
        .create(GameParams {
            item: item_params("Hades"),
            platforms: vec!["PC".to_string(), "Switch".to_string()],
            languages: vec!["English".to_string()],
            multiplayer: false,
            genre: Some("Roguelike".to_string()),
        })
        .await?;

    assert_eq!(created.platforms, vec!["PC", "Switch"]);

    let stored = repo.get_by_id(created.id).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests that `get_all` includes factory rows alongside repository rows.
///
/// Expected: Ok(Vec<Game>) of length 2
#[tokio::test]
async fn gets_all_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;
    factory::game::GameFactory::new(db)
        .multiplayer(true)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    assert_eq!(games.len(), 2);
    assert!(games[1].multiplayer);

    Ok(())
}
