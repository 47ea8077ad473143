use super::*;

/// Tests publishing an announcement.
///
/// Verifies that new announcements start in the `Open` status and keep the
/// owner passed in the parameters.
///
/// Expected: Ok with status Open
#[tokio::test]
async fn creates_open_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let created = repo
        .create(CreateAnnouncementParams {
            owner_username: "alice".to_string(),
            fields: fields("Cat sitting", "Lyon"),
        })
        .await?;

    assert_eq!(created.owner_username, "alice");
    assert_eq!(created.status, AnnouncementStatus::Open);
    assert_eq!(created.remuneration, Some(120));
    assert!(created.is_open());

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}
