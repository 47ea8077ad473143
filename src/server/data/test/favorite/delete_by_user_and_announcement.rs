use super::*;

/// Tests removing a favorite.
///
/// Verifies that only the caller's favorite is removed and that removing a
/// missing favorite reports nothing deleted.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn removes_only_the_users_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db, "owner").await?;
    factory::create_favorite(db, "bob", announcement.id).await?;
    factory::create_favorite(db, "carol", announcement.id).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.delete_by_user_and_announcement("bob", announcement.id).await?);
    assert!(!repo.delete_by_user_and_announcement("bob", announcement.id).await?);
    assert!(repo.exists("carol", announcement.id).await?);

    Ok(())
}
