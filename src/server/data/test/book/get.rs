use super::*;

/// Tests listing books.
///
/// Expected: Ok(Vec<Book>) with every inserted book in id order
#[tokio::test]
async fn gets_all_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_book(db).await?;
    let second = factory::book::BookFactory::new(db)
        .book_type("Manga")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, first.id);
    assert_eq!(books[1].book_type, BookType::Manga);
    assert_eq!(books[1].id, second.id);

    Ok(())
}

/// Tests reading a row whose stored type is not a known book type.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), DbErr> {
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

    let repo = BookRepository::new(db);
    let result = repo.get_by_id(book.id).await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}

/// Tests listing books when one stored row has an unknown type.
///
/// Expected: Ok(Vec<Book>) with only the readable book
#[tokio::test]
async fn get_all_skips_unknown_stored_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .book_type("Scroll")
        .build()
        .await?;
    let readable = factory::create_book(db).await?;

    let books = BookRepository::new(db).get_all().await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, readable.id);

    Ok(())
}
