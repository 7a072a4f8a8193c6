use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    model::{
        api::{DataDto, EmptyDto, ErrorDto},
        user::{AuthenticateDto, AuthenticatedUserDto, UserDto, UserFieldsDto},
    },
    server::{
        controller::catalog::envelope,
        error::AppError,
        middleware::auth::AuthenticatedUser,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Routes under `/users`. `/users/current` takes precedence over `/users/{id}`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/authenticate", post(authenticate))
        .route("/users/current", get(get_current))
        .route("/users", get(get_all))
        .route("/users/{id}", get(get_by_id).put(update).delete(delete))
}

/// Register a new account.
///
/// Public endpoint. The password is hashed before storage and never returned.
///
/// # Returns
/// - `200 OK` - `{}`
/// - `400 Bad Request` - Missing or malformed field
/// - `500 Internal Server Error` - Username or email already in use
#[utoipa::path(
    post,
    path = "/users/register",
    tag = USER_TAG,
    request_body = DataDto<UserFieldsDto>,
    responses(
        (status = 200, description = "Account created", body = EmptyDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 500, description = "Username or email already in use", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<DataDto<UserFieldsDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let fields = envelope(payload)?;

    let service = UserService::new(&state.db, state.hash_cost);
    service.register(fields).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Log in with username and password.
///
/// Public endpoint. The body is `{ username, password }` without a data envelope.
///
/// # Returns
/// - `200 OK` - The user and a bearer token
/// - `400 Bad Request` - Malformed body or wrong credentials
#[utoipa::path(
    post,
    path = "/users/authenticate",
    tag = USER_TAG,
    request_body = AuthenticateDto,
    responses(
        (status = 200, description = "Authenticated", body = AuthenticatedUserDto),
        (status = 400, description = "Username or password is incorrect", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(credentials) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let service = UserService::new(&state.db, state.hash_cost);
    let (user, token) = service.authenticate(&state.tokens, credentials).await?;

    Ok((
        StatusCode::OK,
        Json(AuthenticatedUserDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.hash_cost);

    let users: Vec<UserDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// The user the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/users/current",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_current(
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get one user.
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.hash_cost);

    let user = service
        .get_by_id(&id)
        .await
        .map_err(AppError::not_found_as_404)?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace a user's profile; the password changes only when one is supplied.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = DataDto<UserFieldsDto>,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "User missing or username/email taken", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<DataDto<UserFieldsDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let fields = envelope(payload)?;

    let service = UserService::new(&state.db, state.hash_cost);
    let user = service.update(&id, fields).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user. Their tokens stop working immediately.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Deleted", body = EmptyDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.hash_cost);

    service.delete(&id).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
