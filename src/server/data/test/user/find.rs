use super::*;

/// Tests the lookups used by login and the uniqueness checks.
///
/// Expected: each lookup finds the same user, unknown keys return None
#[tokio::test]
async fn finds_by_id_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("reader")
        .email("reader@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(user.id).await?.map(|u| u.id), Some(user.id));
    assert_eq!(
        repo.find_by_username("reader").await?.map(|u| u.id),
        Some(user.id)
    );
    assert_eq!(
        repo.find_by_email("reader@example.com").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests listing users in registration order.
///
/// Expected: Ok(Vec<User>) ordered by id
#[tokio::test]
async fn gets_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
