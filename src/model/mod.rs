//! Wire types shared by every service.
//!
//! DTOs are the JSON shapes of requests and responses. They never reach the data
//! layer directly; controllers convert them into validated parameter models.

pub mod announcement;
pub mod api;
pub mod application;
pub mod chat;
pub mod favorite;
pub mod rating;
pub mod user;
