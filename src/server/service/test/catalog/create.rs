use super::*;

/// Tests creating a series and listing it back.
///
/// Expected: get_all returns exactly the created series
#[tokio::test]
async fn creates_series_and_lists_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Series>::new(db);
    let created = service
        .create(series_params("test", &["a", "b"]))
        .await
        .unwrap();

    let all = service.get_all().await.unwrap();

    assert_eq!(all, vec![created.clone()]);
    assert_eq!(created.name, "test");
    assert_eq!(created.items, vec!["a", "b"]);

    Ok(())
}

/// Tests that a second series with the same name is rejected.
///
/// Verifies the duplicate message and that the failed create left the table unchanged.
///
/// Expected: Err(DomainError::Duplicate) and get_all still has one entry
#[tokio::test]
async fn rejects_duplicate_series_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Series>::new(db);
    service
        .create(series_params("test", &["a", "b"]))
        .await
        .unwrap();

    let err = domain_error(service.create(series_params("test", &[])).await);

    assert_eq!(
        err,
        DomainError::Duplicate("Series \"test\" already exists".to_string())
    );
    assert_eq!(service.get_all().await.unwrap().len(), 1);

    Ok(())
}

/// Tests that the company name guard is independent from series names.
///
/// Expected: a company may share a name with a series, but not with another company
#[tokio::test]
async fn company_names_are_unique_per_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::series::SeriesFactory::new(db)
        .name("Shared")
        .build()
        .await?;

    let service = CatalogService::<Company>::new(db);
    service.create(company_params("Shared")).await.unwrap();

    let err = domain_error(service.create(company_params("Shared")).await);

    assert!(matches!(err, DomainError::Duplicate(msg) if msg.starts_with("Company")));

    Ok(())
}

/// Tests that item types have no natural key.
///
/// Expected: two books with the same title are both stored
#[tokio::test]
async fn books_may_share_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Book>::new(db);
    service.create(book_params("Mort")).await.unwrap();
    service.create(book_params("Mort")).await.unwrap();

    assert_eq!(service.get_all().await.unwrap().len(), 2);

    Ok(())
}
