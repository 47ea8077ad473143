use super::*;

#[tokio::test]
async fn deletes_existing_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "alice").await?;
    let repo = AnnouncementRepository::new(db);

    assert!(repo.delete(announcement.id).await?);
    assert!(repo.find_by_id(announcement.id).await?.is_none());
    assert!(!repo.delete(announcement.id).await?);

    Ok(())
}
