use super::*;

/// Tests creating a user stamps the creation time.
///
/// Expected: Ok(User) with created_at set
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let repo = UserRepository::new(db);
    let user = repo.create(record("reader", "reader@example.com")).await?;

    assert_eq!(user.username, "reader");
    assert_eq!(user.hash, "hash");
    assert!(user.created_at >= before - chrono::Duration::seconds(1));

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr) for the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.create(record("other", "shared@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
