use super::*;

#[tokio::test]
async fn deletes_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avis)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rating = factory::create_avis(db, "alice", "bob", 4).await?;
    let repo = RatingRepository::new(db);

    assert!(repo.delete(rating.id).await?);
    assert!(!repo.delete(rating.id).await?);
    assert!(!repo.exists("alice", "bob").await?);

    Ok(())
}
