//! User profile domain models and parameters.
//!
//! A profile is keyed by the username the gateway authenticated, so the
//! username never comes from a request body.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UpsertUserDto, UserDto},
    server::error::AppError,
};

/// Public profile of a platform user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            bio: self.bio,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            city: entity.city,
            bio: entity.bio,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Profile fields used for both creation and full replacement.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub bio: Option<String>,
}

impl UpsertUserParams {
    /// Builds parameters for the caller's profile from a request body.
    ///
    /// # Arguments
    /// - `username` - Caller asserted by the gateway
    /// - `dto` - Submitted profile fields
    ///
    /// # Returns
    /// - `Ok(UpsertUserParams)` - Trimmed, validated fields
    /// - `Err(AppError::Validation)` - Email lacks an `@` or a name is blank
    pub fn from_dto(username: String, dto: UpsertUserDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("email", "email must be a valid address"));
        }

        let first_name = required_text("first_name", dto.first_name)?;
        let last_name = required_text("last_name", dto.last_name)?;

        Ok(Self {
            username,
            email,
            first_name,
            last_name,
            city: optional_text(dto.city),
            bio: optional_text(dto.bio),
        })
    }
}

/// Trims a mandatory text field and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(field, format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, treating blank input as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
