use super::*;

/// Tests listing the applications an announcement received.
///
/// Verifies that applications are returned oldest first and that applications
/// to other announcements are excluded.
///
/// Expected: Ok with two applications in creation order
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    let other = factory::create_announcement(db, "owner").await?;
    let first = factory::create_application(db, announcement.id, "bob").await?;
    factory::create_application(db, other.id, "bob").await?;
    let second = factory::create_application(db, announcement.id, "carol").await?;

    let applications = ApplicationRepository::new(db)
        .get_by_announcement(announcement.id)
        .await?;

    let ids: Vec<i32> = applications.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
