use super::*;

/// Tests replacing a book keeps the id and overwrites the fields.
///
/// Expected: Ok(Book) with new title and authors
#[tokio::test]
async fn replaces_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_book(db).await?;

    let mut params = params("Guards! Guards!");
    params.authors = vec!["Terry Pratchett".to_string(), "Stephen Briggs".to_string()];

    let repo = BookRepository::new(db);
    let updated = repo.update(created.id, params).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.item.title, "Guards! Guards!");
    assert_eq!(updated.authors.len(), 2);

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.update(7, params("Missing")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
