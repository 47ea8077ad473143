//! Business logic layer between controllers and repositories.
//!
//! Services take validated parameter models, enforce ownership and uniqueness rules,
//! and return domain models. They map missing records to `AppError::NotFound`.

pub mod announcement;
pub mod application;
pub mod chat;
pub mod favorite;
pub mod rating;
pub mod user;
