use super::*;

/// Tests updating a user keeps the original creation time.
///
/// Expected: Ok(User) with new fields and unchanged created_at
#[tokio::test]
async fn updates_user_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(created.id, record("renamed", "renamed@example.com"))
        .await?;

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: Ok(()) and the user can no longer be found
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
