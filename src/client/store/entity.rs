use std::collections::HashMap;

use crate::{client::model::error::ApiError, model::catalog::Identified};

/// Normalized records of one type.
///
/// `all_ids` holds every key of `by_id` exactly once, in the order the records were first
/// seen. Every transition in [`EntityState::reduce`] keeps the two in step.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<T> {
    pub by_id: HashMap<i32, T>,
    pub all_ids: Vec<i32>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Id of the last record fetched by id. Resolved through `by_id`, so it never holds
    /// data of its own.
    pub selected: Option<i32>,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            all_ids: Vec::new(),
            loading: false,
            error: None,
            selected: None,
        }
    }
}

/// Request/success/failure phases of the five CRUD operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction<T> {
    CreateRequest,
    CreateSuccess(T),
    CreateFailure(ApiError),
    GetAllRequest,
    GetAllSuccess(Vec<T>),
    GetAllFailure(ApiError),
    GetByIdRequest,
    GetByIdSuccess(T),
    GetByIdFailure(ApiError),
    UpdateRequest,
    UpdateSuccess(T),
    UpdateFailure(ApiError),
    DeleteRequest,
    DeleteSuccess(i32),
    DeleteFailure(ApiError),
}

impl<T> EntityAction<T> {
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            EntityAction::CreateRequest
                | EntityAction::GetAllRequest
                | EntityAction::GetByIdRequest
                | EntityAction::UpdateRequest
                | EntityAction::DeleteRequest
        )
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            EntityAction::CreateFailure(error)
            | EntityAction::GetAllFailure(error)
            | EntityAction::GetByIdFailure(error)
            | EntityAction::UpdateFailure(error)
            | EntityAction::DeleteFailure(error) => Some(error),
            _ => None,
        }
    }
}

impl<T: Identified> EntityState<T> {
    /// Records in `all_ids` order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.all_ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.by_id.get(&id)
    }

    /// The selected record, if it is loaded.
    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|id| self.by_id.get(&id))
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    /// Applies one action and returns the next state.
    ///
    /// Request phases only raise `loading`; failures only record the error. Both leave the
    /// records alone.
    pub fn reduce(mut self, action: EntityAction<T>) -> Self {
        if action.is_request() {
            self.loading = true;
            return self;
        }

        self.loading = false;

        if let Some(error) = action.failure() {
            self.error = Some(error.clone());
            return self;
        }

        self.error = None;

        match action {
            EntityAction::CreateSuccess(entity) => self.upsert(entity),
            EntityAction::GetAllSuccess(entities) => {
                self.by_id.clear();
                self.all_ids.clear();
                for entity in entities {
                    self.upsert(entity);
                }
                self.selected = self.selected.filter(|id| self.by_id.contains_key(id));
            }
            EntityAction::GetByIdSuccess(entity) => self.selected = Some(entity.id()),
            EntityAction::UpdateSuccess(entity) => {
                if let Some(existing) = self.by_id.get_mut(&entity.id()) {
                    *existing = entity;
                }
            }
            EntityAction::DeleteSuccess(id) => {
                self.by_id.remove(&id);
                self.all_ids.retain(|existing| *existing != id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
            }
            _ => {}
        }

        self
    }

    /// Inserts or replaces a record, appending its id only the first time it is seen.
    fn upsert(&mut self, entity: T) {
        let id = entity.id();
        if self.by_id.insert(id, entity).is_none() {
            self.all_ids.push(id);
        }
    }
}
