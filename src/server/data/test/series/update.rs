use super::*;

/// Tests replacing every field of a series.
///
/// Expected: Ok(Series) with the new name and items, same id
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::series::SeriesFactory::new(db)
        .items(&["7"])
        .build()
        .await?;

    let repo = SeriesRepository::new(db);
    let updated = repo.update(created.id, params("Renamed")).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
    assert!(updated.items.is_empty());

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a series that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    let result = repo.update(42, params("Nothing")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
