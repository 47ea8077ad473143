use super::*;

#[tokio::test]
async fn marks_announcement_as_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    let repo = FavoriteRepository::new(db);

    assert!(!repo.exists("bob", announcement.id).await?);

    let favorite = repo.create("bob", announcement.id).await?;
    assert_eq!(favorite.username, "bob");
    assert_eq!(favorite.announcement_id, announcement.id);

    assert!(repo.exists("bob", announcement.id).await?);
    assert!(!repo.exists("carol", announcement.id).await?);

    Ok(())
}
