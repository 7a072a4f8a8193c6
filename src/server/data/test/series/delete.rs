use super::*;

/// Tests deleting a series.
///
/// Expected: Ok(()) and the series is gone
#[tokio::test]
async fn deletes_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that was never used.
///
/// Expected: Ok(())
#[tokio::test]
async fn deleting_missing_id_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    repo.delete(123).await?;

    Ok(())
}
