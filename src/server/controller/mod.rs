//! HTTP request handlers.
//!
//! Controllers extract the caller and request data, convert DTOs into validated
//! parameter models, call the matching service and convert the result back to DTOs.

pub mod announcement;
pub mod application;
pub mod chat;
pub mod docs;
pub mod favorite;
pub mod rating;
pub mod user;

#[cfg(test)]
mod test;
