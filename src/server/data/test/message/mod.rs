use crate::server::{
    data::message::MessageRepository,
    model::{chat::SendMessageParams, pagination::PageParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_discussion_paginated;
