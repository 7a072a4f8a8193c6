//! Handlers shared by the six catalog collections.
//!
//! Each handler is generic over the `CatalogDocument` it serves; the router instantiates
//! them once per `CatalogKind`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::api::{DataDto, EmptyDto},
    server::{
        error::AppError,
        middleware::auth::AuthenticatedUser,
        service::catalog::{CatalogDocument, CatalogService},
        state::AppState,
    },
};

/// Routes for one collection under its REST path, e.g. for companies:
///
/// - `GET /companies` and `POST /companies`
/// - `GET /companies/{id}`, `PUT /companies/{id}` and `DELETE /companies/{id}`
pub fn catalog_routes<D: CatalogDocument>() -> Router<AppState> {
    let collection = format!("/{}", D::KIND.path());
    let record = format!("/{}/{{id}}", D::KIND.path());

    Router::new()
        .route(&collection, get(list::<D>).post(create::<D>))
        .route(
            &record,
            get(get_by_id::<D>).put(update::<D>).delete(delete::<D>),
        )
}

/// Unwraps the `{ "data": ... }` envelope, reporting a malformed body as a validation error.
pub fn envelope<T>(payload: Result<Json<DataDto<T>>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(DataDto { data })) => Ok(data),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}

/// List every record of the collection.
///
/// # Returns
/// - `200 OK` - JSON array in insertion order
/// - `401 Unauthorized` - Missing or invalid token
pub async fn list<D: CatalogDocument>(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::<D>::new(&state.db);

    let documents = service.get_all().await?;
    let dtos: Vec<D::Dto> = documents.into_iter().map(D::dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one record.
///
/// This is the only catalog endpoint that answers 404; a missing record anywhere else is a
/// 500 carrying the not-found message.
///
/// # Returns
/// - `200 OK` - The record
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No record with that id
pub async fn get_by_id<D: CatalogDocument>(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::<D>::new(&state.db);

    let document = service
        .get_by_id(&id)
        .await
        .map_err(AppError::not_found_as_404)?;

    Ok((StatusCode::OK, Json(document.dto())))
}

/// Create a record from `{ "data": fields }`.
///
/// # Returns
/// - `200 OK` - The created record
/// - `400 Bad Request` - Malformed body or failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Duplicate natural key or database error
pub async fn create<D: CatalogDocument>(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    payload: Result<Json<DataDto<D::FieldsDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = D::validate(envelope(payload)?)?;

    let service = CatalogService::<D>::new(&state.db);
    let document = service.create(params).await?;

    Ok((StatusCode::OK, Json(document.dto())))
}

/// Replace every field of a record with `{ "data": fields }`.
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Malformed body or failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Missing record, duplicate natural key or database error
pub async fn update<D: CatalogDocument>(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<DataDto<D::FieldsDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = D::validate(envelope(payload)?)?;

    let service = CatalogService::<D>::new(&state.db);
    let document = service.update(&id, params).await?;

    Ok((StatusCode::OK, Json(document.dto())))
}

/// Delete a record. Succeeds whether or not the record existed.
///
/// # Returns
/// - `200 OK` - `{}`
/// - `401 Unauthorized` - Missing or invalid token
pub async fn delete<D: CatalogDocument>(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::<D>::new(&state.db);

    service.delete(&id).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
