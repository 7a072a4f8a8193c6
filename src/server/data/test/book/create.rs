use super::*;

/// Tests creating a book with every optional field populated.
///
/// Verifies that the type, author list and base item fields survive the round trip
/// through the JSON and enum columns.
///
/// Expected: Ok(Book) equal to the stored row
#[tokio::test]
async fn creates_book_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = params("Mort");
    params.book_type = BookType::LightNovel;
    params.volume = Some(4);
    params.isbn = Some("978-0552131063".to_string());
    params.item.list_price = Some(8.99);
    params.item.series = Some("Discworld".to_string());
    params.item.checked_out = true;
    params.item.checked_out_by = Some("Sam".to_string());

    let repo = BookRepository::new(db);
    let created = repo.create(params.clone()).await?;

    assert_eq!(created.item, params.item);
    assert_eq!(created.book_type, BookType::LightNovel);
    assert_eq!(created.volume, Some(4));

    let stored = repo.get_by_id(created.id).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}
