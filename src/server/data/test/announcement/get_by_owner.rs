use super::*;

#[tokio::test]
async fn returns_only_the_owners_announcements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_announcement(db, "alice").await?;
    factory::create_announcement(db, "bob").await?;
    let second = factory::create_announcement(db, "alice").await?;

    let owned = AnnouncementRepository::new(db).get_by_owner("alice").await?;

    let ids: Vec<i32> = owned.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
