use crate::server::{
    data::rating::RatingRepository,
    model::{pagination::PageParams, rating::CreateRatingParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_recipient_paginated;
mod summary_for_recipient;
