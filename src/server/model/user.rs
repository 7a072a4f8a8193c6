//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserFieldsDto},
    server::{
        error::AppError,
        model::validate::{
            optional_text, required_text, EMAIL_INVALID, EMAIL_REQUIRED, FIRST_NAME_REQUIRED,
            LAST_NAME_REQUIRED, PASSWORD_REQUIRED, USERNAME_REQUIRED,
        },
    },
};

/// A registered user including the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user to its public DTO, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            hash: entity.hash,
            created_at: entity.created_at,
        }
    }
}

/// Validated registration or profile fields, before hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParams {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Plain-text password; `None` keeps the current one on update.
    pub password: Option<String>,
}

impl UserParams {
    /// Validates a registration payload; the password is mandatory.
    pub fn for_register(dto: UserFieldsDto) -> Result<Self, AppError> {
        let params = Self::for_update(dto)?;
        if params.password.is_none() {
            return Err(AppError::Validation(PASSWORD_REQUIRED.to_string()));
        }
        Ok(params)
    }

    /// Validates a profile replacement; the password is optional.
    pub fn for_update(dto: UserFieldsDto) -> Result<Self, AppError> {
        let username = required_text(dto.username, USERNAME_REQUIRED)?;
        let email = required_text(dto.email, EMAIL_REQUIRED)?;
        if !looks_like_email(&email) {
            return Err(AppError::Validation(EMAIL_INVALID.to_string()));
        }

        Ok(Self {
            username,
            email,
            first_name: required_text(dto.first_name, FIRST_NAME_REQUIRED)?,
            last_name: required_text(dto.last_name, LAST_NAME_REQUIRED)?,
            password: optional_text(dto.password),
        })
    }
}

/// Single `@` with a non-empty local part and a dotted domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() > 1
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> UserFieldsDto {
        UserFieldsDto {
            username: Some("reader".to_string()),
            password: Some("hunter2".to_string()),
            email: Some("reader@example.com".to_string()),
            first_name: Some("Rea".to_string()),
            last_name: Some("Der".to_string()),
        }
    }

    fn message(result: Result<UserParams, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn register_requires_password() {
        let dto = UserFieldsDto {
            password: None,
            ..dto()
        };
        assert_eq!(message(UserParams::for_register(dto)), PASSWORD_REQUIRED);
    }

    #[test]
    fn update_allows_missing_password() {
        let dto = UserFieldsDto {
            password: Some("  ".to_string()),
            ..dto()
        };
        assert_eq!(UserParams::for_update(dto).unwrap().password, None);
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["reader", "reader@", "@example.com", "reader@example", "a@b@c.d"] {
            let dto = UserFieldsDto {
                email: Some(email.to_string()),
                ..dto()
            };
            assert_eq!(message(UserParams::for_register(dto)), EMAIL_INVALID, "{}", email);
        }
    }
}
