//! Read-only queries over the store state.

use crate::{
    client::{model::error::ApiError, resource::Resource, store::RootState},
    model::user::UserDto,
};

/// Every record of `R` in store order.
pub fn all<R: Resource>(state: &RootState) -> Vec<&R> {
    R::slice(state).iter().collect()
}

pub fn by_id<R: Resource>(state: &RootState, id: i32) -> Option<&R> {
    R::slice(state).get(id)
}

pub fn selected<R: Resource>(state: &RootState) -> Option<&R> {
    R::slice(state).selected()
}

pub fn is_loading<R: Resource>(state: &RootState) -> bool {
    R::slice(state).loading
}

pub fn error<R: Resource>(state: &RootState) -> Option<&ApiError> {
    R::slice(state).error.as_ref()
}

pub fn current_user(state: &RootState) -> Option<&UserDto> {
    state.auth.user.as_ref()
}

pub fn is_authenticated(state: &RootState) -> bool {
    state.auth.is_authenticated()
}
