use super::*;

/// Tests fetching a record created through a factory.
///
/// Expected: Ok(Series) with the factory's name
#[tokio::test]
async fn gets_existing_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_series(db).await?;

    let service = CatalogService::<Series>::new(db);
    let series = service.get_by_id(&created.id.to_string()).await.unwrap();

    assert_eq!(series.name, created.name);

    Ok(())
}

/// Tests that unknown and malformed ids fail the same way.
///
/// Expected: Err(DomainError::NotFound("Book not found")) for every id
#[tokio::test]
async fn missing_and_malformed_ids_are_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Book>::new(db);

    for id in ["999", "5f2b9c0e", "", "-1"] {
        let err = domain_error(service.get_by_id(id).await);
        assert_eq!(err, DomainError::NotFound("Book not found".to_string()), "{}", id);
    }

    Ok(())
}

/// Tests that an unreadable stored row surfaces as not found.
///
/// Expected: Err(DomainError::NotFound)
#[tokio::test]
async fn unreadable_row_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .book_type("Scroll")
        .build()
        .await?;

    let service = CatalogService::<Book>::new(db);
    let err = domain_error(service.get_by_id(&book.id.to_string()).await);

    assert!(matches!(err, DomainError::NotFound(_)));

    Ok(())
}
