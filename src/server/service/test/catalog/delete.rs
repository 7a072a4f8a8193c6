use super::*;

/// Tests deleting a book.
///
/// Expected: get_by_id fails with NotFound and get_all no longer lists it
#[tokio::test]
async fn deleted_book_is_gone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_book(db).await?;
    let removed = factory::create_book(db).await?;

    let service = CatalogService::<Book>::new(db);
    service.delete(&removed.id.to_string()).await.unwrap();

    let err = domain_error(service.get_by_id(&removed.id.to_string()).await);
    assert!(matches!(err, DomainError::NotFound(_)));

    let ids: Vec<i32> = service
        .get_all()
        .await
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}

/// Tests that deleting unknown or malformed ids succeeds.
///
/// Expected: Ok(()) every time
#[tokio::test]
async fn delete_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_series(db).await?;
    let id = created.id.to_string();

    let service = CatalogService::<Series>::new(db);
    service.delete(&id).await.unwrap();
    service.delete(&id).await.unwrap();
    service.delete("not-an-id").await.unwrap();

    Ok(())
}
