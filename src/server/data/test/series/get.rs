use super::*;

/// Tests listing series in insertion order.
///
/// Expected: Ok(Vec<Series>) ordered by id
#[tokio::test]
async fn gets_all_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_series(db).await?;
    let second = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);
    let all = repo.get_all().await?;

    let ids: Vec<i32> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests getting a series that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests finding a series by its exact name.
///
/// Expected: Ok(Some(Series)) for the exact name, Ok(None) for a different case
#[tokio::test]
async fn finds_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::series::SeriesFactory::new(db)
        .name("Discworld")
        .build()
        .await?;

    let repo = SeriesRepository::new(db);

    let found = repo.find_by_name("Discworld").await?;
    assert_eq!(found.map(|s| s.id), Some(created.id));

    let other = repo.find_by_name("Dune").await?;
    assert!(other.is_none());

    Ok(())
}
