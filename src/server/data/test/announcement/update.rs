use super::*;

/// Tests replacing an announcement's fields and closing it.
///
/// Expected: Ok with new fields, status Closed and unchanged owner
#[tokio::test]
async fn replaces_fields_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "alice").await?;

    let updated = AnnouncementRepository::new(db)
        .update(UpdateAnnouncementParams {
            id: announcement.id,
            fields: fields("Dog walking", "Nantes"),
            status: AnnouncementStatus::Closed,
        })
        .await?;

    assert_eq!(updated.title, "Dog walking");
    assert_eq!(updated.city, "Nantes");
    assert_eq!(updated.status, AnnouncementStatus::Closed);
    assert_eq!(updated.owner_username, "alice");
    assert_eq!(updated.created_at, announcement.created_at);

    Ok(())
}

/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AnnouncementRepository::new(db)
        .update(UpdateAnnouncementParams {
            id: 42,
            fields: fields("Dog walking", "Nantes"),
            status: AnnouncementStatus::Open,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
