use super::*;

/// Tests sending an application.
///
/// Expected: Ok with status Sent
#[tokio::test]
async fn creates_sent_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    let repo = ApplicationRepository::new(db);

    let created = repo
        .create(CreateApplicationParams {
            announcement_id: announcement.id,
            guardian_username: "bob".to_string(),
            message: Some("Happy to help".to_string()),
        })
        .await?;

    assert_eq!(created.status, ApplicationStatus::Sent);
    assert_eq!(created.guardian_username, "bob");
    assert_eq!(repo.find_by_id(created.id).await?, Some(created));

    Ok(())
}
