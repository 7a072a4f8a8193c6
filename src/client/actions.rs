//! Action creators: each API call wrapped in its request/success/failure triple.
//!
//! The result of the call is returned as well as dispatched, so callers can chain on the
//! created record or surface the error without reading it back out of the store.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        model::error::ApiError,
        resource::Resource,
        store::{auth::AuthAction, entity::EntityAction, Action, Store},
    },
    model::user::{AuthenticatedUserDto, UserFieldsDto},
};

fn settle<T, R: Resource>(
    store: &mut Store,
    result: Result<T, ApiError>,
    success: impl FnOnce(&T) -> EntityAction<R>,
    failure: fn(ApiError) -> EntityAction<R>,
) -> Result<T, ApiError> {
    match &result {
        Ok(value) => store.dispatch(R::action(success(value))),
        Err(error) => {
            tracing::warn!("{} request failed: {}", R::PATH, error);
            store.dispatch(R::action(failure(error.clone())));
        }
    }
    result
}

pub async fn get_all<R: Resource>(
    client: &ApiClient,
    store: &mut Store,
) -> Result<Vec<R>, ApiError> {
    store.dispatch(R::action(EntityAction::GetAllRequest));
    let result = client.get_all::<R>().await;
    settle::<_, R>(
        store,
        result,
        |records: &Vec<R>| EntityAction::GetAllSuccess(records.clone()),
        EntityAction::GetAllFailure,
    )
}

pub async fn get_by_id<R: Resource>(
    client: &ApiClient,
    store: &mut Store,
    id: i32,
) -> Result<R, ApiError> {
    store.dispatch(R::action(EntityAction::GetByIdRequest));
    let result = client.get_by_id::<R>(id).await;
    settle::<_, R>(
        store,
        result,
        |record: &R| EntityAction::GetByIdSuccess(record.clone()),
        EntityAction::GetByIdFailure,
    )
}

pub async fn create<R: Resource>(
    client: &ApiClient,
    store: &mut Store,
    fields: &R::Fields,
) -> Result<R, ApiError> {
    store.dispatch(R::action(EntityAction::CreateRequest));
    let result = client.create::<R>(fields).await;
    settle::<_, R>(
        store,
        result,
        |record: &R| EntityAction::CreateSuccess(record.clone()),
        EntityAction::CreateFailure,
    )
}

pub async fn update<R: Resource>(
    client: &ApiClient,
    store: &mut Store,
    id: i32,
    fields: &R::Fields,
) -> Result<R, ApiError> {
    store.dispatch(R::action(EntityAction::UpdateRequest));
    let result = client.update::<R>(id, fields).await;
    settle::<_, R>(
        store,
        result,
        |record: &R| EntityAction::UpdateSuccess(record.clone()),
        EntityAction::UpdateFailure,
    )
}

pub async fn delete<R: Resource>(
    client: &ApiClient,
    store: &mut Store,
    id: i32,
) -> Result<(), ApiError> {
    store.dispatch(R::action(EntityAction::DeleteRequest));
    let result = client.delete::<R>(id).await;
    settle::<_, R>(
        store,
        result,
        |_| EntityAction::DeleteSuccess(id),
        EntityAction::DeleteFailure,
    )
}

pub async fn register(
    client: &ApiClient,
    store: &mut Store,
    fields: &UserFieldsDto,
) -> Result<(), ApiError> {
    store.dispatch(Action::Auth(AuthAction::RegisterRequest));

    match client.register(fields).await {
        Ok(()) => {
            store.dispatch(Action::Auth(AuthAction::RegisterSuccess));
            Ok(())
        }
        Err(error) => {
            tracing::warn!("Registration failed: {}", error);
            store.dispatch(Action::Auth(AuthAction::RegisterFailure(error.clone())));
            Err(error)
        }
    }
}

/// Authenticates and, on success, installs the token on `client` for later calls.
pub async fn login(
    client: &mut ApiClient,
    store: &mut Store,
    username: &str,
    password: &str,
) -> Result<AuthenticatedUserDto, ApiError> {
    store.dispatch(Action::Auth(AuthAction::LoginRequest));

    match client.authenticate(username, password).await {
        Ok(authenticated) => {
            client.set_token(Some(authenticated.token.clone()));
            store.dispatch(Action::Auth(AuthAction::LoginSuccess(authenticated.clone())));
            Ok(authenticated)
        }
        Err(error) => {
            tracing::warn!("Login failed for {}: {}", username, error);
            store.dispatch(Action::Auth(AuthAction::LoginFailure(error.clone())));
            Err(error)
        }
    }
}

pub fn logout(client: &mut ApiClient, store: &mut Store) {
    client.set_token(None);
    store.dispatch(Action::Auth(AuthAction::Logout));
}
