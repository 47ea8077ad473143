//! Application service for business logic.
//!
//! Guardians apply to open announcements they do not own. The announcement owner
//! reviews applications and accepts or refuses them; a guardian may withdraw their own.

use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{announcement::AnnouncementRepository, application::ApplicationRepository},
    error::AppError,
    middleware::identity::AuthenticatedUser,
    model::application::{Application, ApplicationDecision, CreateApplicationParams},
    service::announcement::announcement_not_found,
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends an application to an announcement.
    ///
    /// # Returns
    /// - `Ok(Application)` - Created application in the `Sent` status
    /// - `Err(AppError::NotFound)` - Unknown announcement
    /// - `Err(AppError::BadRequest)` - Caller owns the announcement, or it is closed
    /// - `Err(AppError::Conflict)` - Caller already applied
    pub async fn apply(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let announcement = AnnouncementRepository::new(self.db)
            .find_by_id(params.announcement_id)
            .await?
            .ok_or_else(|| announcement_not_found(params.announcement_id))?;

        if announcement.owner_username == params.guardian_username {
            return Err(AppError::BadRequest(
                "You cannot apply to your own announcement".to_string(),
            ));
        }

        if !announcement.is_open() {
            return Err(AppError::BadRequest(
                "This announcement no longer accepts applications".to_string(),
            ));
        }

        let repo = ApplicationRepository::new(self.db);
        if repo
            .exists_for_guardian(params.announcement_id, &params.guardian_username)
            .await?
        {
            return Err(AppError::Conflict(
                "You already applied to this announcement".to_string(),
            ));
        }

        let application = repo.create(params).await?;
        tracing::info!(
            username = %application.guardian_username,
            announcement_id = application.announcement_id,
            "Application sent"
        );

        Ok(application)
    }

    pub async fn get_by_guardian(&self, guardian_username: &str) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .get_by_guardian(guardian_username)
            .await?)
    }

    /// Lists the applications received by an announcement, for its owner only.
    pub async fn get_by_announcement(
        &self,
        caller: &AuthenticatedUser,
        announcement_id: i32,
    ) -> Result<Vec<Application>, AppError> {
        let owner = AnnouncementRepository::new(self.db)
            .owner_of(announcement_id)
            .await?
            .ok_or_else(|| announcement_not_found(announcement_id))?;
        caller.require_owner(&owner, "list applications")?;

        Ok(ApplicationRepository::new(self.db)
            .get_by_announcement(announcement_id)
            .await?)
    }

    /// Accepts or refuses an application on behalf of the announcement owner.
    ///
    /// An announcement keeps at most one accepted application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::NotFound)` - Unknown application
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller does not own the announcement
    /// - `Err(AppError::Conflict)` - Another application was already accepted
    pub async fn decide(
        &self,
        caller: &AuthenticatedUser,
        id: i32,
        decision: ApplicationDecision,
    ) -> Result<Application, AppError> {
        let repo = ApplicationRepository::new(self.db);
        let application = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| application_not_found(id))?;

        let owner = AnnouncementRepository::new(self.db)
            .owner_of(application.announcement_id)
            .await?
            .ok_or_else(|| announcement_not_found(application.announcement_id))?;
        caller.require_owner(&owner, "decide on application")?;

        if decision.status() == ApplicationStatus::Accepted
            && application.status != ApplicationStatus::Accepted
        {
            let accepted = repo
                .count_by_announcement_and_status(
                    application.announcement_id,
                    ApplicationStatus::Accepted,
                )
                .await?;
            if accepted > 0 {
                return Err(AppError::Conflict(
                    "Another application was already accepted for this announcement".to_string(),
                ));
            }
        }

        let updated = repo.update_status(id, decision.status()).await?;
        tracing::info!(
            username = %caller.username(),
            application_id = id,
            status = updated.status.as_str(),
            "Application decided"
        );

        Ok(updated)
    }

    /// Withdraws an application on behalf of the guardian who sent it.
    pub async fn withdraw(&self, caller: &AuthenticatedUser, id: i32) -> Result<(), AppError> {
        let repo = ApplicationRepository::new(self.db);
        let application = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| application_not_found(id))?;
        caller.require_owner(&application.guardian_username, "withdraw application")?;

        repo.delete(id).await?;

        Ok(())
    }
}

fn application_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Application with id {} not found", id))
}
