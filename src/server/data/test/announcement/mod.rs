use crate::server::{
    data::announcement::AnnouncementRepository,
    model::{
        announcement::{
            AnnouncementFields, CreateAnnouncementParams, GetAnnouncementsParams,
            UpdateAnnouncementParams,
        },
        pagination::PageParams,
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::AnnouncementStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_owner;
mod get_paginated;
mod owner_of;
mod update;

fn fields(title: &str, city: &str) -> AnnouncementFields {
    AnnouncementFields {
        title: title.to_string(),
        description: "Feed the cat twice a day".to_string(),
        city: city.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        remuneration: Some(120),
    }
}
