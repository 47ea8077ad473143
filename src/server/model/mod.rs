//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod announcement;
pub mod application;
pub mod chat;
pub mod favorite;
pub mod pagination;
pub mod rating;
pub mod user;
