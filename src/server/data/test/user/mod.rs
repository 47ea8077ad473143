use crate::server::{data::user::UserRepository, model::user::UpsertUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod update;

fn profile(username: &str) -> UpsertUserParams {
    UpsertUserParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        first_name: "Alice".to_string(),
        last_name: "Martin".to_string(),
        city: Some("Lyon".to_string()),
        bio: None,
    }
}
