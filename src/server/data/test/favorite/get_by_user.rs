use super::*;

#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_announcement(db, "owner").await?;
    let second = factory::create_announcement(db, "owner").await?;
    let older = factory::create_favorite(db, "bob", first.id).await?;
    factory::create_favorite(db, "carol", first.id).await?;
    let newer = factory::create_favorite(db, "bob", second.id).await?;

    let favorites = FavoriteRepository::new(db).get_by_user("bob").await?;

    let ids: Vec<i32> = favorites.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
