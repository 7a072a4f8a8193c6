//! Field-level validation rules and their messages.

use crate::server::error::AppError;

pub const NAME_REQUIRED: &str = "Name is required";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const PHYSICAL_REQUIRED: &str = "Physical is required";
pub const DIGITAL_REQUIRED: &str = "Digital is required";
pub const PUBLISHER_REQUIRED: &str = "Publisher is required";
pub const AUTHORS_REQUIRED: &str = "Authors are required";
pub const TYPE_REQUIRED: &str = "Type is required";
pub const FORMAT_REQUIRED: &str = "Format is required";
pub const IS_COLLECTION_REQUIRED: &str = "Is collection is required";
pub const PLATFORMS_REQUIRED: &str = "Platforms are required";
pub const MULTIPLAYER_REQUIRED: &str = "Multiplayer is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const LIST_PRICE_NEGATIVE: &str = "List price cannot be negative";

/// Requires a value to be present.
pub fn required<T>(value: Option<T>, message: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Requires non-blank text, returning it trimmed.
pub fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Treats blank optional text as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Parses an enumerated value, failing with the list of accepted names.
pub fn one_of<T: Copy>(
    value: &str,
    field: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, AppError> {
    all.iter()
        .copied()
        .find(|candidate| as_str(*candidate) == value)
        .ok_or_else(|| {
            let accepted: Vec<&str> = all.iter().map(|t| as_str(*t)).collect();
            AppError::Validation(format!("{} must be one of: {}", field, accepted.join(", ")))
        })
}
