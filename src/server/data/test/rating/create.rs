use super::*;

#[tokio::test]
async fn creates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avis)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RatingRepository::new(db);
    let rating = repo
        .create(CreateRatingParams {
            author_username: "alice".to_string(),
            recipient_username: "bob".to_string(),
            note: 5,
            commentaire: Some("ok".to_string()),
        })
        .await?;

    assert_eq!(rating.note, 5);
    assert_eq!(rating.commentaire.as_deref(), Some("ok"));
    assert!(repo.exists("alice", "bob").await?);
    assert!(!repo.exists("bob", "alice").await?);
    assert_eq!(repo.find_by_id(rating.id).await?, Some(rating));

    Ok(())
}
