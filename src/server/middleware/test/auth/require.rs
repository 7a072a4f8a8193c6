use super::*;

/// Tests a valid token for an existing user.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let user = factory::create_user(db).await?;
    let token = tokens.issue(user.id)?;

    let guard = AuthGuard::new(db, &tokens);
    let authenticated = guard
        .require(&headers_with(&format!("Bearer {}", token)))
        .await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests headers that do not carry a bearer token.
///
/// Expected: Err(AuthError::MissingToken) for each header
#[tokio::test]
async fn rejects_non_bearer_schemes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let guard = AuthGuard::new(db, &tokens);

    for value in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer   ", "token"] {
        let result = guard.require(&headers_with(value)).await;
        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))),
            "{}",
            value
        );
    }

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let user = factory::create_user(db).await?;
    let forged = TokenService::new("other", 1).issue(user.id)?;

    let guard = AuthGuard::new(db, &tokens);
    let result = guard
        .require(&headers_with(&format!("Bearer {}", forged)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a well-formed token whose user has been deleted.
///
/// Expected: Err(AuthError::RevokedToken)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let token = tokens.issue(404)?;

    let guard = AuthGuard::new(db, &tokens);
    let result = guard
        .require(&headers_with(&format!("bearer {}", token)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RevokedToken(404)))
    ));

    Ok(())
}
