use super::*;

/// Tests creating a series.
///
/// Verifies that the repository stores the name and item list and assigns an id.
///
/// Expected: Ok(Series) with a positive id
#[tokio::test]
async fn creates_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    let series = repo
        .create(SeriesParams {
            name: "Discworld".to_string(),
            items: vec!["1".to_string(), "2".to_string()],
        })
        .await?;

    assert!(series.id > 0);
    assert_eq!(series.name, "Discworld");
    assert_eq!(series.items, vec!["1", "2"]);

    Ok(())
}

/// Tests that the name column is unique.
///
/// Verifies that a second insert with the same name is rejected by the database even
/// without the service-level pre-check.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::series::SeriesFactory::new(db)
        .name("Discworld")
        .build()
        .await?;

    let repo = SeriesRepository::new(db);
    let result = repo.create(params("Discworld")).await;

    assert!(result.is_err());

    Ok(())
}
