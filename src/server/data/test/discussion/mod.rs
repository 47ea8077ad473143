use crate::server::{data::discussion::DiscussionRepository, model::chat::OpenDiscussionParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_between;
mod get_for_user;
mod touch;
