use crate::server::{
    data::application::ApplicationRepository, model::application::CreateApplicationParams,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_announcement_and_status;
mod create;
mod exists_for_guardian;
mod get_by_announcement;
mod get_by_guardian;
mod update_status;
