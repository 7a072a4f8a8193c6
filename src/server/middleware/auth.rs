use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
    state::AppState,
};

/// Resolves the bearer token on a request to a live user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Requires a valid token whose user still exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The user the token was issued to
    /// - `Err(AppError::AuthErr)` - Missing, invalid or revoked token
    /// - `Err(AppError::DbErr)` - Database error during user lookup
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::RevokedToken(user_id).into());
        };

        Ok(user)
    }
}

/// Token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Extractor for handlers on protected routes.
///
/// Runs the `AuthGuard` before the request body is read, so an unauthenticated request is
/// rejected with 401 even when its body is also invalid.
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.tokens)
            .require(&parts.headers)
            .await?;

        Ok(AuthenticatedUser(user))
    }
}
