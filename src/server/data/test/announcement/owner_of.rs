use super::*;

/// Expected: Ok(Some(owner)) for an existing announcement, Ok(None) otherwise
#[tokio::test]
async fn returns_owner_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "alice").await?;
    let repo = AnnouncementRepository::new(db);

    assert_eq!(repo.owner_of(announcement.id).await?.as_deref(), Some("alice"));
    assert_eq!(repo.owner_of(announcement.id + 1).await?, None);

    Ok(())
}
