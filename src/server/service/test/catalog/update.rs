use super::*;

/// Tests replacing a series keeps its position in the listing.
///
/// Expected: Ok(Series) with new fields, get_all order unchanged
#[tokio::test]
async fn update_keeps_listing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_series(db).await?;
    let second = factory::create_series(db).await?;

    let service = CatalogService::<Series>::new(db);
    let updated = service
        .update(&first.id.to_string(), series_params("Renamed", &["x"]))
        .await
        .unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.name, "Renamed");

    let ids: Vec<i32> = service
        .get_all()
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let fetched = service.get_by_id(&first.id.to_string()).await.unwrap();
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests saving a series without changing its name.
///
/// Expected: Ok(Series), the record does not collide with itself
#[tokio::test]
async fn unchanged_name_is_not_a_duplicate() -> Result<(), DbErr> {
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

    let service = CatalogService::<Series>::new(db);
    let updated = service
        .update(&created.id.to_string(), series_params("Discworld", &["1"]))
        .await
        .unwrap();

    assert_eq!(updated.items, vec!["1"]);

    Ok(())
}

/// Tests renaming a series onto another series' name.
///
/// Expected: Err(DomainError::Duplicate), stored name unchanged
#[tokio::test]
async fn rename_onto_existing_name_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::series::SeriesFactory::new(db)
        .name("Taken")
        .build()
        .await?;
    let target = factory::series::SeriesFactory::new(db)
        .name("Original")
        .build()
        .await?;

    let service = CatalogService::<Series>::new(db);
    let err = domain_error(
        service
            .update(&target.id.to_string(), series_params("Taken", &[]))
            .await,
    );

    assert!(matches!(err, DomainError::Duplicate(_)));
    let stored = service.get_by_id(&target.id.to_string()).await.unwrap();
    assert_eq!(stored.name, "Original");

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Expected: Err(DomainError::NotFound("Company not found"))
#[tokio::test]
async fn update_of_missing_record_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Company>::new(db);
    let err = domain_error(service.update("12", company_params("Nobody")).await);

    assert_eq!(err, DomainError::NotFound("Company not found".to_string()));

    Ok(())
}
