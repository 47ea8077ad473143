use super::*;

/// Expected: Ok with the new status and a refreshed `updated_at`
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    let application = factory::create_application(db, announcement.id, "bob").await?;

    let updated = ApplicationRepository::new(db)
        .update_status(application.id, ApplicationStatus::Accepted)
        .await?;

    assert_eq!(updated.status, ApplicationStatus::Accepted);
    assert_ne!(updated.updated_at, application.updated_at);

    Ok(())
}

#[tokio::test]
async fn fails_for_missing_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .update_status(7, ApplicationStatus::Refused)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
