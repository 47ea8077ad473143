use super::*;

#[tokio::test]
async fn counts_per_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    factory::application::ApplicationFactory::new(db, announcement.id)
        .guardian("bob")
        .status(ApplicationStatus::Accepted)
        .build()
        .await?;
    factory::create_application(db, announcement.id, "carol").await?;
    factory::create_application(db, announcement.id, "dave").await?;

    let repo = ApplicationRepository::new(db);
    assert_eq!(
        repo.count_by_announcement_and_status(announcement.id, ApplicationStatus::Accepted)
            .await?,
        1
    );
    assert_eq!(
        repo.count_by_announcement_and_status(announcement.id, ApplicationStatus::Sent)
            .await?,
        2
    );
    assert_eq!(
        repo.count_by_announcement_and_status(announcement.id, ApplicationStatus::Refused)
            .await?,
        0
    );

    Ok(())
}
